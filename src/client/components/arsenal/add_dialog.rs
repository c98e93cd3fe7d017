use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::util::api, model::arsenal::ArsenalKind};

/// Dialog adding equipment, the type defaults to the selected tab
#[component]
pub fn AddArsenalDialog(
    open: Signal<bool>,
    default_kind: ArsenalKind,
    on_created: EventHandler<ArsenalKind>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut kind = use_signal(|| default_kind);
    let mut error = use_signal(|| None::<String>);

    // Follow the selected tab while the dialog is closed
    use_effect(use_reactive!(|default_kind| {
        if !open() {
            kind.set(default_kind);
        }
    }));

    let mut close = move || {
        name.set(String::new());
        error.set(None);
        open.set(false);
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let new_name = name().trim().to_string();
        let new_kind = kind();

        if new_name.is_empty() {
            error.set(Some("Equipment name is required.".to_string()));
            return;
        }

        spawn(async move {
            match api::create_arsenal(new_name, new_kind).await {
                Ok(_) => {
                    close();
                    on_created.call(new_kind);
                }
                Err(err) => {
                    tracing::error!("Failed to add equipment: {}", err);
                    error.set(Some(err.message));
                }
            }
        });
    };

    rsx!(
        div {
            class: if open() { "modal modal-open" } else { "modal" },
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "Add Arsenal" }
                form {
                    class: "flex flex-col gap-4 pt-4",
                    onsubmit: submit,
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Equipment name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    div { class: "flex gap-4",
                        for option in ArsenalKind::ALL {
                            label { class: "flex items-center gap-2",
                                input {
                                    class: "radio",
                                    r#type: "radio",
                                    name: "arsenal-kind",
                                    checked: kind() == option,
                                    onchange: move |_| kind.set(option),
                                }
                                "{option.label()}"
                            }
                        }
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
                        button { class: "btn btn-primary", r#type: "submit", "Add" }
                    }
                }
            }
        }
    )
}
