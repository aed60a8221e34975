//! Sales Database Component
//!
//! Paginated lead table with free-text search and status filter. Rapid
//! keystrokes are debounced and every fetch carries a sequence ticket so
//! a slow stale response can never overwrite a newer one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LeadQuery};
use crate::components::{alert, DeleteConfirmButton, LeadFormModal};
use crate::context::AppContext;
use crate::models::{LeadStatus, Page, SalesLead};
use crate::query::{page_count, QuerySequence};
use crate::session::use_session;

const PAGE_LIMIT: u32 = 50;
/// Coalesces rapid keystrokes and filter flips into one fetch
const FETCH_DEBOUNCE_MS: u32 = 250;

fn status_from_value(value: &str) -> Option<LeadStatus> {
    LeadStatus::ALL.into_iter().find(|s| s.as_str() == value)
}

#[component]
pub fn SalesDatabase() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (page_index, set_page_index) = signal(0u32);
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(None::<LeadStatus>);
    let (lead_page, set_lead_page) = signal(Page::<SalesLead>::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(None::<SalesLead>);
    let seq = QuerySequence::new();

    Effect::new(move |_| {
        let _ = ctx.leads_changed.watch();
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
            let query = LeadQuery { skip, limit: PAGE_LIMIT, status, search: term, ..Default::default() };
            let outcome = api::list_leads(session, &query).await;
            if !seq.is_current(ticket) {
                // A newer query went out while this one was in flight
                return;
            }
            match outcome {
                Ok(fresh) => {
                    set_lead_page.set(fresh);
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(err.to_string()),
            }
            set_loading.set(false);
        });
    });

    let on_delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_lead(session, id).await {
                Ok(()) => {
                    alert("Lead deleted successfully");
                    ctx.leads_changed.notify();
                }
                Err(err) => alert(&format!("Error: {}", err)),
            }
        });
    };

    let on_saved = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
        ctx.leads_changed.notify();
    });
    let on_close = Callback::new(move |_: ()| {
        set_show_form.set(false);
        set_editing.set(None);
    });

    let total_pages = move || page_count(lead_page.get().total, PAGE_LIMIT);

    view! {
        <div class="sales-db">
            <div class="sales-db-header">
                <h1>"Sales Leads Database"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        set_editing.set(None);
                        set_show_form.set(true);
                    }
                >
                    "+ Add Lead"
                </button>
            </div>

            <div class="sales-db-filters">
                <input
                    type="text"
                    class="sales-search"
                    placeholder="Search by company, owner, project code..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_search.set(event_target_value(&ev));
                        set_page_index.set(0);
                    }
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        set_status_filter.set(status_from_value(&event_target_value(&ev)));
                        set_page_index.set(0);
                    }
                >
                    <option value="">"All Status"</option>
                    {LeadStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="sales-db-stats">
                {move || {
                    let page = lead_page.get();
                    format!("Showing {} of {} leads", page.items.len(), page.total)
                }}
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
                                <th>"Company"</th>
                                <th>"Project Code"</th>
                                <th>"Owner"</th>
                                <th>"Email"</th>
                                <th>"Phone"</th>
                                <th>"Status"</th>
                                <th>"Location"</th>
                                <th>"Notes"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || lead_page.get().items.is_empty()>
                                <tr><td colspan="9" class="empty">"No leads found"</td></tr>
                            </Show>
                            <For
                                each=move || lead_page.get().items
                                key=|lead| lead.id
                                children=move |lead| {
                                    let id = lead.id;
                                    let edit_lead = lead.clone();
                                    let notes_preview = lead.notes.clone().map(|notes| {
                                        if notes.chars().count() > 40 {
                                            format!("{}...", notes.chars().take(40).collect::<String>())
                                        } else {
                                            notes
                                        }
                                    });
                                    view! {
                                        <tr>
                                            <td class="strong">{lead.company_name.clone()}</td>
                                            <td>{lead.project_code.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{lead.owner.clone()}</td>
                                            <td>{lead.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{lead.phone.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <span class=format!("status-badge status-{}", lead.status.as_str())>
                                                    {lead.status.as_str()}
                                                </span>
                                            </td>
                                            <td>{lead.location.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="notes">{notes_preview.unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <div class="action-buttons">
                                                    <button
                                                        class="btn btn-small"
                                                        on:click=move |_| {
                                                            set_editing.set(Some(edit_lead.clone()));
                                                            set_show_form.set(true);
                                                        }
                                                    >
                                                        "Edit"
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
                        disabled=move || !lead_page.get().has_more
                        on:click=move |_| set_page_index.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            {move || show_form.get().then(|| view! {
                <LeadFormModal editing=editing.get() on_close=on_close on_saved=on_saved />
            })}
        </div>
    }
}
