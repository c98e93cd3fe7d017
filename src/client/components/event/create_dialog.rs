use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{router::Route, util::api},
    model::event::CreateEventDto,
};

/// Dialog creating an event, then opening it in edit mode
///
/// Validation and server errors are shown inline; `on_created` fires after navigation.
#[component]
pub fn CreateEventDialog(open: Signal<bool>, default_date: String, on_created: EventHandler<()>) -> Element {
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut date = use_signal(|| default_date.clone());
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let mut close = move || {
        name.set(String::new());
        error.set(None);
        open.set(false);
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = CreateEventDto {
            name: name().trim().to_string(),
            date: date().trim().to_string(),
        };

        if form.name.is_empty() || form.date.is_empty() {
            error.set(Some("Both event name and date are required.".to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match api::create_event(&form).await {
                Ok(created) => {
                    close();
                    nav.push(Route::EventDetail {
                        id: created.id,
                        edit: true,
                    });
                    on_created.call(());
                }
                Err(err) => {
                    tracing::error!("Failed to create event: {}", err);
                    error.set(Some(err.message));
                }
            }

            submitting.set(false);
        });
    };

    rsx!(
        div {
            class: if open() { "modal modal-open" } else { "modal" },
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Create Event" }
                form {
                    class: "flex flex-col gap-4 pt-4",
                    onsubmit: submit,
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Event name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    input {
                        class: "input w-full",
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt| date.set(evt.value()),
                    }
                    if let Some(message) = error() {
                        p { class: "text-error text-sm", "{message}" }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| close(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Create"
                        }
                    }
                }
            }
        }
    )
}
