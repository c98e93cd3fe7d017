use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFloppyDisk;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::util::api,
    model::{
        agent::AgentDto,
        arsenal::ArsenalItemDto,
        event::{EventDto, UpdateEventDto},
    },
};

/// Edit form for an event's fields and assignments
#[component]
pub fn EventForm(
    event: EventDto,
    agents: Vec<AgentDto>,
    equipment: Vec<ArsenalItemDto>,
    on_saved: EventHandler<EventDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let event_id = event.id;
    let mut form = use_signal(|| UpdateEventDto::from(&event));
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        saving.set(true);

        spawn(async move {
            match api::update_event(event_id, &form()).await {
                Ok(updated) => {
                    error.set(None);
                    on_saved.call(updated);
                }
                Err(err) => {
                    tracing::error!("Failed to update event {}: {}", event_id, err);
                    error.set(Some(err.message));
                }
            }

            saving.set(false);
        });
    };

    rsx!(
        form {
            class: "flex flex-col gap-4 w-full max-w-3xl",
            onsubmit: submit,
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                TextField { label: "Event name", value: form.read().event_name.clone(),
                    on_input: move |v| form.write().event_name = v }
                label { class: "flex flex-col gap-1",
                    span { class: "text-sm", "Date" }
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: "{form.read().event_date}",
                        oninput: move |evt| form.write().event_date = evt.value(),
                    }
                }
                TextField { label: "Location", value: form.read().location.clone(),
                    on_input: move |v| form.write().location = v }
                TextField { label: "Contact person", value: form.read().contact_person.clone(),
                    on_input: move |v| form.write().contact_person = v }
                TextField { label: "Contact number", value: form.read().contact_number.clone(),
                    on_input: move |v| form.write().contact_number = v }
                TextField { label: "Package", value: form.read().package.clone(),
                    on_input: move |v| form.write().package = v }
                TextField { label: "Layout", value: form.read().layout.clone(),
                    on_input: move |v| form.write().layout = v }
                TextField { label: "HQT", value: form.read().hqt.clone(),
                    on_input: move |v| form.write().hqt = v }
                TextField { label: "AOP", value: form.read().aop.clone(),
                    on_input: move |v| form.write().aop = v }
                CountField { label: "SD cards", value: form.read().sd_card_count,
                    on_input: move |v| form.write().sd_card_count = v }
                CountField { label: "Batteries", value: form.read().battery_count,
                    on_input: move |v| form.write().battery_count = v }
            }
            label { class: "flex flex-col gap-1",
                span { class: "text-sm", "Notes" }
                textarea {
                    class: "textarea w-full",
                    value: "{form.read().notes}",
                    oninput: move |evt| form.write().notes = evt.value(),
                }
            }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "Agents" }
                div { class: "flex flex-wrap gap-4",
                    for agent in agents.iter().cloned() {
                        label { key: "{agent.id}", class: "flex items-center gap-2",
                            input {
                                class: "checkbox",
                                r#type: "checkbox",
                                checked: form.read().agents.contains(&agent.id),
                                onchange: move |_| toggle(&mut form.write().agents, agent.id),
                            }
                            "{agent.first_name} {agent.last_name}"
                        }
                    }
                }
            }
            fieldset { class: "fieldset",
                legend { class: "fieldset-legend", "Equipment" }
                div { class: "flex flex-wrap gap-4",
                    for item in equipment.iter().cloned() {
                        label { key: "{item.id}", class: "flex items-center gap-2",
                            input {
                                class: "checkbox",
                                r#type: "checkbox",
                                checked: form.read().arsenal.contains(&item.id),
                                onchange: move |_| toggle(&mut form.write().arsenal, item.id),
                            }
                            "{item.name} ({item.kind.label()})"
                        }
                    }
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            div { class: "flex gap-2 justify-end",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary flex gap-2",
                    r#type: "submit",
                    disabled: saving(),
                    Icon { width: 14, height: 14, icon: FaFloppyDisk }
                    "Save"
                }
            }
        }
    )
}

/// Adds the ID if missing, removes every occurrence otherwise
fn toggle(ids: &mut Vec<i32>, id: i32) {
    if ids.contains(&id) {
        ids.retain(|existing| *existing != id);
    } else {
        ids.push(id);
    }
}

#[component]
fn TextField(label: String, value: String, on_input: EventHandler<String>) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1",
            span { class: "text-sm", "{label}" }
            input {
                class: "input w-full",
                r#type: "text",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    )
}

#[component]
fn CountField(label: String, value: i32, on_input: EventHandler<i32>) -> Element {
    rsx!(
        label { class: "flex flex-col gap-1",
            span { class: "text-sm", "{label}" }
            input {
                class: "input w-full",
                r#type: "number",
                min: "0",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value().parse().unwrap_or(0)),
            }
        }
    )
}
