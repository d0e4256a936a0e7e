use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::FrontMarker;

#[component]
pub fn MarkersTab(markers: Vec<FrontMarker>) -> Element {
    if markers.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no front markers." }
        };
    }

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "#" }
                    th { "Code" }
                    th { "Belligerent" }
                    th { "X, m" }
                    th { "Y, m" }
                }
            }
            tbody {
                for (i, marker) in markers.iter().enumerate() {
                    {
                        let (x, y) = fmt::pos2(Some(&marker.pos));
                        rsx! {
                            tr {
                                td { "{i}" }
                                td { {fmt::text(marker.code.as_deref())} }
                                td { class: "{marker.belligerent.name}", "{marker.belligerent}" }
                                td { "{x}" }
                                td { "{y}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
