use dioxus::prelude::*;

#[component]
pub fn WaitDialog(open: bool) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "dialog-backdrop",
            div { class: "dialog wait-dialog",
                h3 { "Waiting for server..." }
                div { class: "spinner" }
            }
        }
    }
}
