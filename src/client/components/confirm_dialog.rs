use dioxus::prelude::*;

/// Modal asking the viewer to confirm or cancel an action
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    confirm_label: String,
    #[props(default = "btn-primary".to_string())] confirm_class: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx!(
        div {
            class: if open { "modal modal-open" } else { "modal" },
            div { class: "modal-box",
                h3 { class: "text-lg font-bold", "{title}" }
                p { class: "py-4", "{message}" }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn {confirm_class}",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    )
}
