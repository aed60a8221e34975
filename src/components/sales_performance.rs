//! Sales Performance Component
//!
//! Pipeline overview: per-stage counts with conversion/lost percentages.
//! Prefers the stats endpoint and falls back to counting a lead page
//! client-side; refreshes every 30 seconds while mounted.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, LeadQuery};
use crate::context::AppContext;
use crate::models::{LeadStats, LeadStatus};
use crate::session::use_session;

const REFRESH_INTERVAL_MS: u32 = 30_000;
/// Fallback counting fetch; large enough to cover the whole pipeline
const FALLBACK_LIMIT: u32 = 500;

#[component]
pub fn SalesPerformance() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (stats, set_stats) = signal(LeadStats::default());
    let (last_updated, set_last_updated) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(String::new());
    let (refresh_tick, set_refresh_tick) = signal(0u32);

    let load_stats = move || {
        set_loading.set(true);
        spawn_local(async move {
            let outcome = match api::lead_stats(session).await {
                Ok(fresh) => Ok(fresh),
                Err(ApiError::Unauthorized) => {
                    // Session cleared; the login view takes over
                    return;
                }
                Err(_) => {
                    web_sys::console::log_1(
                        &"[PERF] Stats endpoint unavailable, counting leads client-side".into(),
                    );
                    api::list_leads(session, &LeadQuery { limit: FALLBACK_LIMIT, ..Default::default() })
                        .await
                        .map(|page| LeadStats::from_leads(&page.items))
                }
            };
            match outcome {
                Ok(fresh) => {
                    set_stats.set(fresh);
                    set_last_updated.set(Some(
                        js_sys::Date::new_0().to_locale_time_string("en-US").into(),
                    ));
                    set_error.set(String::new());
                }
                Err(err) => set_error.set(format!("Failed to load sales data: {}", err)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let _ = refresh_tick.get();
        // Pipeline moves elsewhere (board drops) refresh this page too
        let _ = ctx.leads_changed.watch();
        load_stats();
    });

    // Auto-refresh while mounted
    let (alive, set_alive) = signal(true);
    on_cleanup(move || {
        let _ = set_alive.try_set(false);
    });
    spawn_local(async move {
        loop {
            TimeoutFuture::new(REFRESH_INTERVAL_MS).await;
            if !alive.try_get_untracked().unwrap_or(false) {
                break;
            }
            set_refresh_tick.update(|v| *v += 1);
        }
    });

    let stage_count = move |status: LeadStatus| {
        let stats = stats.get();
        match status {
            LeadStatus::New => stats.new,
            LeadStatus::Contacted => stats.contacted,
            LeadStatus::Qualified => stats.qualified,
            LeadStatus::Converted => stats.converted,
            LeadStatus::Lost => stats.lost,
        }
    };

    view! {
        <div class="dashboard-container">
            <Show
                when=move || last_updated.get().is_some() || !loading.get()
                fallback=|| view! {
                    <div class="loading-container">
                        <div class="loading-text">"Loading sales performance..."</div>
                    </div>
                }
            >
                <div class="costing-list-header">
                    <div>
                        <h1>"Sales Performance Dashboard"</h1>
                        <p class="dashboard-welcome">
                            "Real-time overview of your sales pipeline"
                            {move || last_updated.get().map(|time| format!(" • Last updated: {}", time))}
                        </p>
                    </div>
                    <button
                        class="btn btn-primary"
                        disabled=move || loading.get()
                        on:click=move |_| set_refresh_tick.update(|v| *v += 1)
                    >
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>

                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>

                <div class="dashboard-cards">
                    <div class="dashboard-card stat-total">
                        <h3>"Total Leads"</h3>
                        <p class="dashboard-card-number">{move || stats.get().total}</p>
                        <p class="dashboard-card-description">"All leads in system"</p>
                    </div>
                    {LeadStatus::ALL.iter().map(|status| {
                        let status = *status;
                        view! {
                            <div class=format!("dashboard-card stat-{}", status.as_str())>
                                <h3>{status.label()}</h3>
                                <p class="dashboard-card-number">{move || stage_count(status)}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="dashboard-cards metrics-row">
                    <div class="dashboard-card">
                        <h3>"Conversion Rate"</h3>
                        <p class="dashboard-card-number dashboard-card-number-green">
                            {move || format!("{:.1}%", stats.get().conversion_rate())}
                        </p>
                        <p class="dashboard-card-description">"Converted out of all leads"</p>
                    </div>
                    <div class="dashboard-card">
                        <h3>"Lost Rate"</h3>
                        <p class="dashboard-card-number">
                            {move || format!("{:.1}%", stats.get().lost_rate())}
                        </p>
                        <p class="dashboard-card-description">"Lost out of all leads"</p>
                    </div>
                    <div class="dashboard-card">
                        <h3>"Active Pipeline"</h3>
                        <p class="dashboard-card-number dashboard-card-number-blue">
                            {move || stats.get().active_pipeline()}
                        </p>
                        <p class="dashboard-card-description">"New, contacted and qualified"</p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
