use dioxus::prelude::*;

/// Page body offset below the fixed dashboard navbar
#[component]
pub fn Page(#[props(default)] class: String, children: Element) -> Element {
    rsx!(
        main {
            class: "min-h-screen pt-[80px] px-4 pb-8 {class}",
            {children}
        }
    )
}
