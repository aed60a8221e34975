//! Dashboard Component
//!
//! Landing page: headline counts plus shortcuts into the other views.
//! The two count fetches go out together and the page renders once both
//! resolve; a failed fetch just shows 0 for its card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CostingQuery, LeadQuery};
use crate::app::Page;
use crate::context::AppContext;
use crate::session::use_session;

#[component]
pub fn Dashboard(set_current_page: WriteSignal<Page>) -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (lead_total, set_lead_total) = signal(0u32);
    let (costing_total, set_costing_total) = signal(0u32);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        // Refresh counts when either collection changes elsewhere
        let _ = ctx.leads_changed.watch();
        let _ = ctx.costings_changed.watch();
        spawn_local(async move {
            let lead_query = LeadQuery { limit: 1, ..Default::default() };
            let costing_query = CostingQuery { limit: 1, ..Default::default() };
            let (leads, costings) = futures::join!(
                api::list_leads(session, &lead_query),
                api::list_costings(session, &costing_query),
            );
            set_lead_total.set(leads.map(|page| page.total).unwrap_or(0));
            set_costing_total.set(costings.map(|page| page.total).unwrap_or(0));
            set_loading.set(false);
        });
    });

    view! {
        <div class="dashboard-container">
            <h1>"Dashboard"</h1>
            <p class="dashboard-welcome">
                "Welcome to VALOS internal panel, "
                {move || session.username().unwrap_or_else(|| "User".to_string())}
                "!"
            </p>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="dashboard-loading">"Loading dashboard..."</div> }
            >
                <div class="dashboard-cards">
                    <div class="dashboard-card" on:click=move |_| set_current_page.set(Page::SalesDatabase)>
                        <h3>"Sales Leads"</h3>
                        <p class="dashboard-card-number dashboard-card-number-blue">{move || lead_total.get()}</p>
                        <p class="dashboard-card-description">"Track new & contacted client leads."</p>
                    </div>
                    <div class="dashboard-card" on:click=move |_| set_current_page.set(Page::Costings)>
                        <h3>"Costing Engine"</h3>
                        <p class="dashboard-card-number dashboard-card-number-green">{move || costing_total.get()}</p>
                        <p class="dashboard-card-description">"Create costings & generate quotations."</p>
                    </div>
                    <div class="dashboard-card" on:click=move |_| set_current_page.set(Page::LeadTracker)>
                        <h3>"Lead Tracker"</h3>
                        <p class="dashboard-card-number">"📊"</p>
                        <p class="dashboard-card-description">"Manage leads through sales pipeline."</p>
                    </div>
                    <div class="dashboard-card" on:click=move |_| set_current_page.set(Page::Performance)>
                        <h3>"Performance"</h3>
                        <p class="dashboard-card-number">"📈"</p>
                        <p class="dashboard-card-description">"View sales performance metrics."</p>
                    </div>
                </div>

                <div class="dashboard-quick-actions">
                    <h3>"Quick Actions"</h3>
                    <div class="dashboard-action-buttons">
                        <button class="btn btn-primary" on:click=move |_| set_current_page.set(Page::Costings)>
                            "+ New Costing"
                        </button>
                        <button class="btn btn-success" on:click=move |_| set_current_page.set(Page::SalesDatabase)>
                            "View All Leads"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
