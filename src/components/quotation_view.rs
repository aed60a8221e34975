//! Quotation View Component
//!
//! Quotation generator: pick a project, edit per-line quantities, and the
//! row/grand totals recompute from scratch on every change. Quantities
//! reseed to the default whenever the project selection changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, CostingQuery};
use crate::components::alert;
use crate::context::AppContext;
use crate::models::{QuotationDraft, QuotationItem};
use crate::query::unique_project_codes;
use crate::session::use_session;
use crate::store::{
    parsed_quantities, project_costings, store_select_project, store_set_quantity, QuoteState,
    QuoteStateStoreFields,
};
use crate::totals;

/// One fetch covers the whole costing book; quotations are small data
const COSTINGS_LIMIT: u32 = 200;

#[component]
pub fn QuotationView() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let store = Store::new(QuoteState::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.costings_changed.watch();
        spawn_local(async move {
            set_loading.set(true);
            match api::list_costings(session, &CostingQuery { limit: COSTINGS_LIMIT, ..Default::default() }).await {
                Ok(page) => {
                    store.costings().set(page.items);
                    let codes = store.costings().with_untracked(|all| unique_project_codes(all));
                    let current = store.selected_project().get_untracked();
                    if !codes.contains(&current) {
                        if let Some(first) = codes.first() {
                            store_select_project(&store, first.clone());
                        }
                    }
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(format!("Failed to load costings: {}", err)),
            }
            set_loading.set(false);
        });
    });

    let project_codes = Memo::new(move |_| {
        store.costings().with(|all| unique_project_codes(all))
    });
    let items = Memo::new(move |_| project_costings(&store));
    let grand = Memo::new(move |_| {
        totals::grand_total(&items.get(), &parsed_quantities(&store))
    });

    let on_save = move |_| {
        let line_items = items.get_untracked();
        let quantities = parsed_quantities(&store);
        let draft = QuotationDraft {
            project_code: store.selected_project().get_untracked(),
            items: line_items
                .iter()
                .map(|c| QuotationItem {
                    costing_id: c.id,
                    product_name: c.product_name.clone(),
                    quantity: quantities.get(&c.id).copied().unwrap_or(0),
                    unit_price: c.unit_price(),
                    total: totals::row_total(c, &quantities),
                })
                .collect(),
            grand_total: totals::grand_total(&line_items, &quantities),
        };
        spawn_local(async move {
            match api::save_quotation(session, &draft).await {
                Ok(()) => alert("Quotation saved successfully!"),
                Err(err) => alert(&format!("Failed to save quotation: {}", err)),
            }
        });
    };

    let on_print = move |_| {
        if let Some(win) = web_sys::window() {
            let _ = win.print();
        }
    };

    view! {
        <div class="costing-list">
            <Show when=move || !loading.get() fallback=|| view! {
                <div class="loading-container">
                    <div class="loading-text">"Loading costings..."</div>
                </div>
            }>
                <Show when=move || error.get().is_empty() fallback=move || view! {
                    <div class="error-message">{move || error.get()}</div>
                }>
                    <Show when=move || !project_codes.get().is_empty() fallback=|| view! {
                        <div class="empty">
                            <h1>"Quotation Generator"</h1>
                            <p>"No costings available to generate quotations"</p>
                        </div>
                    }>
                        <div class="costing-list-header">
                            <div>
                                <h1>"Quotation Generator"</h1>
                                <p class="dashboard-welcome">"Generate professional quotations from your costings"</p>
                            </div>
                            <div class="action-buttons">
                                <button class="btn btn-success" on:click=on_save>"Save Quotation"</button>
                                <button class="btn btn-primary" on:click=on_print>"Print"</button>
                            </div>
                        </div>

                        <div class="costing-list-filters">
                            <div class="field">
                                <label>"Select Project Code:"</label>
                                <select
                                    class="filter-select"
                                    on:change=move |ev| store_select_project(&store, event_target_value(&ev))
                                >
                                    {move || project_codes.get().into_iter().map(|code| {
                                        let value = code.clone();
                                        let selected = store.selected_project().get() == code;
                                        view! {
                                            <option value=value selected=selected>{code}</option>
                                        }
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="table-wrapper">
                            <table class="sales-table">
                                <thead>
                                    <tr>
                                        <th>"#"</th>
                                        <th>"Product Name"</th>
                                        <th>"SKU (ML)"</th>
                                        <th class="numeric">"Unit Price (₹)"</th>
                                        <th class="centered">"Quantity"</th>
                                        <th class="numeric">"Total (₹)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get().into_iter().enumerate().collect::<Vec<_>>()
                                        key=|(_, costing)| costing.id
                                        children=move |(index, costing)| {
                                            let id = costing.id;
                                            let row = costing.clone();
                                            view! {
                                                <tr>
                                                    <td>{index + 1}</td>
                                                    <td class="strong">{costing.product_name.clone()}</td>
                                                    <td>{costing.sku_ml.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                    <td class="numeric">{format!("₹ {:.2}", costing.unit_price())}</td>
                                                    <td class="centered">
                                                        <input
                                                            type="number"
                                                            class="form-input quantity-input"
                                                            min="0"
                                                            prop:value=move || {
                                                                store.quantity_inputs().with(|inputs| {
                                                                    inputs.get(&id).cloned().unwrap_or_default()
                                                                })
                                                            }
                                                            on:input=move |ev| {
                                                                store_set_quantity(&store, id, event_target_value(&ev));
                                                            }
                                                        />
                                                    </td>
                                                    <td class="numeric strong">
                                                        {move || {
                                                            let quantities = parsed_quantities(&store);
                                                            format!("₹ {:.2}", totals::row_total(&row, &quantities))
                                                        }}
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                                <tfoot>
                                    <tr class="grand-total-row">
                                        <td colspan="5" class="numeric">"Grand Total:"</td>
                                        <td class="numeric">{move || format!("₹ {:.2}", grand.get())}</td>
                                    </tr>
                                </tfoot>
                            </table>
                        </div>

                        <div class="dashboard-quick-actions">
                            <h3>"Summary"</h3>
                            <div class="dashboard-cards">
                                <div class="dashboard-card">
                                    <h3>"Project Code"</h3>
                                    <p class="dashboard-card-number dashboard-card-number-blue">
                                        {move || store.selected_project().get()}
                                    </p>
                                </div>
                                <div class="dashboard-card">
                                    <h3>"Total Items"</h3>
                                    <p class="dashboard-card-number dashboard-card-number-green">
                                        {move || items.get().len()}
                                    </p>
                                </div>
                                <div class="dashboard-card">
                                    <h3>"Total Quantity"</h3>
                                    <p class="dashboard-card-number dashboard-card-number-blue">
                                        {move || totals::total_quantity(&parsed_quantities(&store))}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
