//! Lead Card Component
//!
//! Draggable card on the pipeline board. Clicking cycles the cosmetic
//! priority; the cycle is local-only and never persisted.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::models::{LeadStatus, SalesLead};

#[component]
pub fn LeadCard(
    lead: SalesLead,
    leads: RwSignal<Vec<SalesLead>>,
    dnd: DndSignals<LeadStatus>,
) -> impl IntoView {
    let id = lead.id;
    let priority = lead.priority;

    let on_click = move |_| {
        // A drag that just ended also fires click; ignore it
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        leads.update(|list| {
            if let Some(l) = list.iter_mut().find(|l| l.id == id) {
                l.priority = l.priority.next();
            }
        });
    };

    let notes_preview = lead.notes.clone().map(|notes| {
        if notes.chars().count() > 80 {
            format!("{}...", notes.chars().take(80).collect::<String>())
        } else {
            notes
        }
    });

    view! {
        <div
            class=format!("card priority-{}", priority.as_str())
            class:dragging=move || dnd.dragging_id_read.get() == Some(id)
            on:mousedown=make_on_mousedown(dnd, id)
            on:click=on_click
            title="Click to change priority"
        >
            <div class=format!("priority-dot priority-dot-{}", priority.as_str())></div>
            <div class="priority-label">{priority.as_str().to_uppercase()}</div>
            <div class="card-company">{lead.company_name.clone()}</div>
            <div class="card-owner">{lead.owner.clone()}</div>
            {lead.project_code.clone().map(|code| view! {
                <div class="card-project-code">{code}</div>
            })}
            {lead.email.clone().map(|email| view! {
                <div class="card-email">{email}</div>
            })}
            {notes_preview.map(|notes| view! {
                <div class="card-notes">{notes}</div>
            })}
            <div class="card-hint">"click to cycle priority"</div>
        </div>
    }
}
