use dioxus::html::FileData;
use dioxus::prelude::*;

use mission_viewer_shared::upload::{network_failure, UploadFlow};

use crate::api;
use crate::components::dropzone::Dropzone;
use crate::components::error_dialog::ErrorDialog;
use crate::components::mission::MissionView;
use crate::components::wait_dialog::WaitDialog;
use crate::config::AppConfig;

#[component]
pub fn Viewer() -> Element {
    let config = use_context::<AppConfig>();
    let mut flow = use_signal(UploadFlow::default);

    // Idle -> Waiting -> (Loaded | Failed); one request at a time, the
    // dropzone is disabled while waiting.
    let on_file = move |file: FileData| {
        let parser_url = config.parser_url.clone();
        spawn(async move {
            flow.write().begin();
            let file_name = file.name();
            let outcome = match file.read_bytes().await {
                Ok(bytes) => api::upload_mission(&parser_url, &file_name, bytes.to_vec()).await,
                Err(error) => network_failure(&error.to_string()),
            };
            flow.write().settle(outcome);
        });
    };

    let waiting = flow.read().waiting;
    let error = flow.read().error.clone();
    let mission = flow.read().mission.clone();

    rsx! {
        article { class: "viewer",
            h1 { class: "logo", "Mission file viewer" }
            h3 { class: "logo", "upload a mission file and explore the parsed data" }

            Dropzone { disabled: waiting, on_file }

            if let Some(mission) = mission {
                MissionView { mission }
            }
        }
        WaitDialog { open: waiting }
        ErrorDialog {
            error,
            on_close: move |_| flow.write().dismiss_error(),
        }
    }
}
