//! Costing Form Modal
//!
//! Create/edit form for a costing record. Numeric fields are sent as
//! typed; the backend owns validation and returns a `detail` message we
//! surface verbatim.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CostingDraft};
use crate::components::alert;
use crate::models::{Costing, CostingStatus};
use crate::session::use_session;

#[component]
pub fn CostingFormModal(
    /// Costing being edited, or None when creating
    editing: Option<Costing>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let editing_id = editing.as_ref().map(|costing| costing.id);
    let initial = editing.as_ref().map(CostingDraft::from_costing).unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = draft.get();
        if payload.project_code.is_empty() || payload.product_name.is_empty() {
            alert("Project code and product name are required");
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let outcome = match editing_id {
                Some(id) => api::update_costing(session, id, &payload).await.map(|_| ()),
                None => api::create_costing(session, &payload).await.map(|_| ()),
            };
            set_saving.set(false);
            match outcome {
                Ok(()) => {
                    alert(if editing_id.is_some() { "Costing updated!" } else { "Costing created!" });
                    on_saved.run(());
                }
                Err(err) => alert(&format!("Error: {}", err)),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing_id.is_some() { "Edit Costing" } else { "New Costing" }}</h2>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Project Code"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().project_code
                            on:input=move |ev| draft.update(|d| d.project_code = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Product Name"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().product_name
                            on:input=move |ev| draft.update(|d| d.product_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            let status = match event_target_value(&ev).as_str() {
                                "approved" => CostingStatus::Approved,
                                _ => CostingStatus::Draft,
                            };
                            draft.update(|d| d.status = status);
                        }>
                            <option value="draft" selected=move || draft.get().status == CostingStatus::Draft>
                                "Draft"
                            </option>
                            <option value="approved" selected=move || draft.get().status == CostingStatus::Approved>
                                "Approved"
                            </option>
                        </select>
                    </div>
                    <div class="field">
                        <label>"SKU (ML)"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().sku_ml
                            on:input=move |ev| draft.update(|d| d.sku_ml = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Final Unit Price"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().final_unit_price
                            on:input=move |ev| draft.update(|d| d.final_unit_price = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"MOQ"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().moq
                            on:input=move |ev| draft.update(|d| d.moq = event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
