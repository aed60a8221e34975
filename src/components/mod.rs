//! UI Components
//!
//! Reusable Leptos components.

mod nav_bar;
mod login_form;
mod dashboard;
mod lead_board;
mod lead_card;
mod lead_form;
mod sales_database;
mod costing_list;
mod costing_form;
mod quotation_view;
mod sales_performance;
mod delete_confirm_button;

pub use nav_bar::NavBar;
pub use login_form::LoginForm;
pub use dashboard::Dashboard;
pub use lead_board::LeadBoard;
pub use lead_card::LeadCard;
pub use lead_form::LeadFormModal;
pub use sales_database::SalesDatabase;
pub use costing_list::CostingList;
pub use costing_form::CostingFormModal;
pub use quotation_view::QuotationView;
pub use sales_performance::SalesPerformance;
pub use delete_confirm_button::DeleteConfirmButton;

/// Blocking alert for explicit CRUD outcomes
pub(crate) fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
