//! Lead Board Component
//!
//! Kanban view of the sales pipeline, one column per stage. Dropping a
//! card rewrites the lead locally before the status PATCH goes out; a
//! failed PATCH silently swaps the board back to whatever the backend
//! actually holds.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mouseleave, make_on_zone_mouseenter, DndSignals,
};

use crate::api::{self, LeadQuery};
use crate::components::LeadCard;
use crate::context::AppContext;
use crate::models::{LeadStatus, SalesLead};
use crate::query::filter_leads;
use crate::session::use_session;
use crate::sync::{apply_optimistic_change, SyncState};

/// The board mirrors one large page rather than paginating columns
const BOARD_LIMIT: u32 = 100;

#[component]
pub fn LeadBoard() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let leads = RwSignal::new(Vec::<SalesLead>::new());
    let sync_state = RwSignal::new(SyncState::Synced);
    let (loading, set_loading) = signal(false);
    let (search_term, set_search_term) = signal(String::new());
    let (reload_tick, set_reload_tick) = signal(0u32);

    let load_leads = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::list_leads(session, &LeadQuery { limit: BOARD_LIMIT, ..Default::default() }).await {
                Ok(page) => {
                    web_sys::console::log_1(&format!("[BOARD] Loaded {} leads", page.items.len()).into());
                    leads.set(page.items);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[BOARD] Failed to load leads: {}", err).into());
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let _ = reload_tick.get();
        load_leads();
    });

    // Columns are drop zones keyed by pipeline stage
    let dnd: DndSignals<LeadStatus> = create_dnd_signals();
    bind_global_mouseup(dnd, move |lead_id, new_status: LeadStatus| {
        let current = leads.with_untracked(|list| {
            list.iter().find(|l| l.id == lead_id).map(|l| l.status)
        });
        if current == Some(new_status) {
            return;
        }
        spawn_local(async move {
            apply_optimistic_change(
                leads,
                sync_state,
                lead_id,
                move |lead| lead.status = new_status,
                async move {
                    api::update_lead_status(session, lead_id, new_status).await.map(|_| ())
                },
                move || async move {
                    web_sys::console::warn_1(
                        &"[BOARD] Status update failed, reloading authoritative list".into(),
                    );
                    api::list_leads(session, &LeadQuery { limit: BOARD_LIMIT, ..Default::default() })
                        .await
                        .ok()
                        .map(|page| page.items)
                },
                ctx.leads_changed,
            )
            .await;
        });
    });

    let visible = Memo::new(move |_| filter_leads(&leads.get(), &search_term.get()));

    view! {
        <div class="lead-tracker">
            <div class="lead-tracker-header">
                <div>
                    <h1>"Lead Tracker"</h1>
                    <div class="lead-tracker-stats">
                        "Total: " <strong>{move || visible.get().len()}</strong> " leads"
                        {move || {
                            let term = search_term.get();
                            (!term.trim().is_empty())
                                .then(|| format!(" (filtered from {})", leads.get().len()))
                        }}
                    </div>
                </div>
                <div class="lead-tracker-actions">
                    <input
                        type="text"
                        class="lead-search-input"
                        placeholder="Search by company, owner, project code..."
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn-primary"
                        disabled=move || loading.get()
                        on:click=move |_| set_reload_tick.update(|v| *v += 1)
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || sync_state.get() == SyncState::Reconciling>
                <div class="board-reconciling">"Refreshing board..."</div>
            </Show>

            <div class="columns">
                {LeadStatus::ALL.iter().map(|status| {
                    let status = *status;
                    let column_leads = Memo::new(move |_| {
                        visible.get().into_iter().filter(|l| l.status == status).collect::<Vec<_>>()
                    });
                    let is_drop_target = move || {
                        dnd.dragging_id_read.get().is_some()
                            && dnd.drop_target_read.get() == Some(status)
                    };
                    view! {
                        <div
                            class="column"
                            class=("drop-ready", is_drop_target)
                            on:mouseenter=make_on_zone_mouseenter(dnd, status)
                            on:mouseleave=make_on_mouseleave(dnd)
                        >
                            <div class="column-header">
                                <h3>{status.label()}</h3>
                                <div class="column-count">{move || column_leads.get().len()}</div>
                            </div>
                            <div class="column-body">
                                <Show when=move || column_leads.get().is_empty()>
                                    <div class="column-empty">"Drop leads here"</div>
                                </Show>
                                <For
                                    each=move || column_leads.get()
                                    key=|lead| (lead.id, lead.priority)
                                    children=move |lead| view! { <LeadCard lead=lead leads=leads dnd=dnd /> }
                                />
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
