//! Costing List Component
//!
//! Paginated costing table with search and status filter, plus
//! duplicate/delete row actions and the create/edit modal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CostingQuery};
use crate::components::{alert, CostingFormModal, DeleteConfirmButton};
use crate::context::AppContext;
use crate::models::{Costing, CostingStatus, Page};
use crate::query::{page_count, QuerySequence};
use crate::session::use_session;

const PAGE_LIMIT: u32 = 50;
const FETCH_DEBOUNCE_MS: u32 = 250;

#[component]
pub fn CostingList() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (page_index, set_page_index) = signal(0u32);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(None::<CostingStatus>);
    let (costing_page, set_costing_page) = signal(Page::<Costing>::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<Costing>);
    let seq = QuerySequence::new();

    Effect::new(move |_| {
        let _ = ctx.costings_changed.watch();
        let skip = page_index.get() * PAGE_LIMIT;
        let term = search.get();
        let status = status_filter.get();
        let ticket = seq.begin();
        spawn_local(async move {
            TimeoutFuture::new(FETCH_DEBOUNCE_MS).await;
            if !seq.is_current(ticket) {
                return;
            }
            set_loading.set(true);
            let query = CostingQuery { skip, limit: PAGE_LIMIT, status, search: term, ..Default::default() };
            let outcome = api::list_costings(session, &query).await;
            if !seq.is_current(ticket) {
                return;
            }
            match outcome {
                Ok(fresh) => {
                    set_costing_page.set(fresh);
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    let on_duplicate = move |id: u32| {
        spawn_local(async move {
            match api::duplicate_costing(session, id).await {
                Ok(()) => ctx.costings_changed.notify(),
                Err(err) => alert(&format!("Error: {}", err)),
            }
        });
    };

    let on_delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_costing(session, id).await {
                Ok(()) => {
                    alert("Costing deleted successfully");
                    ctx.costings_changed.notify();
                }
                Err(err) => alert(&format!("Error: {}", err)),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
        ctx.costings_changed.notify();
    });
    let on_close = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
    });

    let total_pages = move || page_count(costing_page.get().total, PAGE_LIMIT);

    view! {
        <div class="costing-list">
            <div class="costing-list-header">
                <h1>"Costing Engine"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ New Costing"
                </button>
            </div>

            <div class="costing-list-filters">
                <input
                    type="text"
                    class="sales-search"
                    placeholder="Search by project code or product..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page_index.set(0);
                    }
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_status_filter.set(match value.as_str() {
                            "draft" => Some(CostingStatus::Draft),
                            "approved" => Some(CostingStatus::Approved),
                            _ => None,
                        });
                        set_page_index.set(0);
                    }
                >
                    <option value="">"All Status"</option>
                    <option value="draft">"Draft"</option>
                    <option value="approved">"Approved"</option>
                </select>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-text">"Loading..."</div>
            </Show>
            <Show when=move || !error.get().is_empty()>
                <div class="error-message">{move || format!("Error: {}", error.get())}</div>
            </Show>

            <Show when=move || !loading.get() && error.get().is_empty()>
                <div class="table-wrapper">
                    <table class="sales-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Project Code"</th>
                                <th>"Product"</th>
                                <th>"Status"</th>
                                <th>"SKU (ML)"</th>
                                <th>"Unit Price"</th>
                                <th>"MOQ"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || costing_page.get().items.is_empty()>
                                <tr><td colspan="8" class="empty">"No costings found"</td></tr>
                            </Show>
                            <For
                                each=move || costing_page.get().items
                                key=|costing| costing.id
                                children=move |costing| {
                                    let id = costing.id;
                                    let edit_costing = costing.clone();
                                    view! {
                                        <tr>
                                            <td>{costing.id}</td>
                                            <td class="strong">{costing.project_code.clone()}</td>
                                            <td>{costing.product_name.clone()}</td>
                                            <td>
                                                <span class=format!("status-badge status-{}", costing.status.as_str())>
                                                    {costing.status.as_str()}
                                                </span>
                                            </td>
                                            <td>{costing.sku_ml.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="numeric">{format!("₹{:.2}", costing.unit_price())}</td>
                                            <td>{costing.moq.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <div class="action-buttons">
                                                    <button
                                                        class="btn btn-small"
                                                        on:click=move |_| {
                                                            set_editing.set(Some(edit_costing.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button class="btn btn-small" on:click=move |_| on_duplicate(id)>
                                                        "Duplicate"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        button_class="btn btn-small btn-danger"
                                                        on_confirm=Callback::new(move |_: ()| on_delete(id))
                                                    />
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>

                <div class="pagination">
                    <button
                        class="btn btn-small"
                        disabled=move || page_index.get() == 0
                        on:click=move |_| set_page_index.update(|p| *p = p.saturating_sub(1))
                    >
                        "Previous"
                    </button>
                    <span class="pagination-info">
                        {move || format!("Page {} of {}", page_index.get() + 1, total_pages().max(1))}
                    </span>
                    <button
                        class="btn btn-small"
                        disabled=move || !costing_page.get().has_more
                        on:click=move |_| set_page_index.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            {move || show_form.get().then(|| view! {
                <CostingFormModal editing=editing.get() on_close=on_close on_saved=on_saved />
            })}
        </div>
    }
}
