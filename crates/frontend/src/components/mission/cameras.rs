use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Camera;

#[component]
pub fn CamerasTab(cameras: Vec<Camera>) -> Element {
    if cameras.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no cameras." }
        };
    }

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "#" }
                    th { "Belligerent" }
                    th { "X, m" }
                    th { "Y, m" }
                    th { "Z, m" }
                }
            }
            tbody {
                for (i, camera) in cameras.iter().enumerate() {
                    {
                        let (x, y, z) = fmt::pos3(Some(&camera.pos));
                        rsx! {
                            tr {
                                td { "{i}" }
                                td { class: "{camera.belligerent.name}", "{camera.belligerent}" }
                                td { "{x}" }
                                td { "{y}" }
                                td { "{z}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
