//! VALOS Dashboard App
//!
//! Top-level component: session gate plus page switching.

use leptos::prelude::*;

use crate::components::{
    CostingList, Dashboard, LeadBoard, LoginForm, NavBar, QuotationView, SalesDatabase,
    SalesPerformance,
};
use crate::context::AppContext;
use crate::session::SessionContext;

/// Dashboard pages
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    SalesDatabase,
    LeadTracker,
    Costings,
    Quotation,
    Performance,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::SalesDatabase,
        Page::LeadTracker,
        Page::Costings,
        Page::Quotation,
        Page::Performance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::SalesDatabase => "Sales Database",
            Page::LeadTracker => "Lead Tracker",
            Page::Costings => "Costings",
            Page::Quotation => "Quotation",
            Page::Performance => "Performance",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionContext::load();
    let (current_page, set_current_page) = signal(Page::Dashboard);

    // Provide context to all children
    provide_context(session);
    provide_context(AppContext::new());

    view! {
        <div class="app-shell">
            {move || if session.is_authenticated() {
                view! {
                    <NavBar current_page=current_page set_current_page=set_current_page />
                    <main class="page-content">
                        {move || match current_page.get() {
                            Page::Dashboard => view! { <Dashboard set_current_page=set_current_page /> }.into_any(),
                            Page::SalesDatabase => view! { <SalesDatabase /> }.into_any(),
                            Page::LeadTracker => view! { <LeadBoard /> }.into_any(),
                            Page::Costings => view! { <CostingList /> }.into_any(),
                            Page::Quotation => view! { <QuotationView /> }.into_any(),
                            Page::Performance => view! { <SalesPerformance /> }.into_any(),
                        }}
                    </main>
                }.into_any()
            } else {
                view! { <LoginForm /> }.into_any()
            }}
        </div>
    }
}
