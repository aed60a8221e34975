//! Lead Form Modal
//!
//! Create/edit form for a sales lead. Validation errors from the backend
//! surface verbatim in a blocking alert.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, LeadDraft};
use crate::components::alert;
use crate::models::{LeadStatus, SalesLead};
use crate::session::use_session;

#[component]
pub fn LeadFormModal(
    /// Lead being edited, or None when creating
    editing: Option<SalesLead>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let editing_id = editing.as_ref().map(|lead| lead.id);
    let initial = editing.as_ref().map(LeadDraft::from_lead).unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = draft.get();
        if payload.company_name.is_empty() || payload.owner.is_empty() {
            alert("Company name and owner are required");
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let outcome = match editing_id {
                Some(id) => api::update_lead(session, id, &payload).await,
                None => api::create_lead(session, &payload).await,
            };
            set_saving.set(false);
            match outcome {
                Ok(_) => {
                    alert(if editing_id.is_some() { "Lead updated!" } else { "Lead created!" });
                    on_saved.run(());
                }
                Err(err) => alert(&format!("Error: {}", err)),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing_id.is_some() { "Edit Lead" } else { "Add Lead" }}</h2>
                <form on:submit=on_submit>
                    <div class="field">
                        <label>"Company Name"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().company_name
                            on:input=move |ev| draft.update(|d| d.company_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Owner"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().owner
                            on:input=move |ev| draft.update(|d| d.owner = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Phone"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().phone
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Status"</label>
                        <select on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some(status) = LeadStatus::ALL.into_iter().find(|s| s.as_str() == value) {
                                draft.update(|d| d.status = status);
                            }
                        }>
                            {LeadStatus::ALL.iter().map(|status| {
                                let status = *status;
                                view! {
                                    <option
                                        value=status.as_str()
                                        selected=move || draft.get().status == status
                                    >
                                        {status.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label>"Location"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().location
                            on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Segment"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().segment
                            on:input=move |ev| draft.update(|d| d.segment = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Project Code"</label>
                        <input
                            type="text"
                            prop:value=move || draft.get().project_code
                            on:input=move |ev| draft.update(|d| d.project_code = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Notes"</label>
                        <textarea
                            prop:value=move || draft.get().notes
                            on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                        ></textarea>
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
