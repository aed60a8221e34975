//! Navigation Bar Component
//!
//! Top bar with page tabs, signed-in user, and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::app::Page;
use crate::session::use_session;

#[component]
pub fn NavBar(
    current_page: ReadSignal<Page>,
    set_current_page: WriteSignal<Page>,
) -> impl IntoView {
    let session = use_session();

    let on_logout = move |_| {
        spawn_local(async move {
            api::logout(session).await;
        });
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-brand">"VALOS"</div>
            {Page::ALL.iter().map(|page| {
                let page = *page;
                let is_active = move || current_page.get() == page;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| set_current_page.set(page)
                    >
                        {page.title()}
                    </button>
                }
            }).collect_view()}
            <div class="nav-spacer"></div>
            <span class="nav-user">{move || session.username().unwrap_or_default()}</span>
            <button class="nav-logout" on:click=on_logout>"Logout"</button>
        </nav>
    }
}
