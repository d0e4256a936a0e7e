use dioxus::html::HasFileData;
use dioxus::html::FileData;
use dioxus::prelude::*;

/// Single-file drop target. Disabled while an upload is in flight so a
/// second drop cannot start a concurrent request.
#[component]
pub fn Dropzone(disabled: bool, on_file: EventHandler<FileData>) -> Element {
    rsx! {
        label {
            class: if disabled { "dropzone disabled" } else { "dropzone" },
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt: Event<DragData>| {
                evt.prevent_default();
                if disabled {
                    return;
                }
                if let Some(file) = evt.files().into_iter().next() {
                    on_file.call(file);
                }
            },
            input {
                r#type: "file",
                accept: ".mis",
                multiple: false,
                disabled,
                onchange: move |evt: Event<FormData>| {
                    if let Some(file) = evt.files().into_iter().next() {
                        on_file.call(file);
                    }
                },
            }
            div { class: "dropzone-hint",
                if disabled {
                    "Uploading..."
                } else {
                    "Click here to select mission file or drop it here."
                }
            }
        }
    }
}
