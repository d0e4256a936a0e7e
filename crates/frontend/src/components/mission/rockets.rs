use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Rocket;

#[component]
pub fn RocketsTab(rockets: Vec<Rocket>) -> Element {
    if rockets.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no rockets." }
        };
    }

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "ID" }
                    th { "Code" }
                    th { "Belligerent" }
                    th { "X, m" }
                    th { "Y, m" }
                    th { "Angle" }
                    th { "Delay, s" }
                    th { "Count" }
                    th { "Period, s" }
                    th { "Destination X, m" }
                    th { "Destination Y, m" }
                }
            }
            tbody {
                for rocket in &rockets {
                    {
                        let (x, y) = fmt::pos2(Some(&rocket.pos));
                        let (dest_x, dest_y) = fmt::pos2(rocket.destination.as_ref());
                        let delay = rocket
                            .delay
                            .map(|d| format!("{d:.0}"))
                            .unwrap_or_else(|| fmt::NA.to_string());
                        let period = rocket
                            .period
                            .map(|p| format!("{p:.0}"))
                            .unwrap_or_else(|| fmt::NA.to_string());
                        rsx! {
                            tr {
                                td { "{rocket.id}" }
                                td { "{rocket.code}" }
                                td { class: "{rocket.belligerent.name}", "{rocket.belligerent}" }
                                td { "{x}" }
                                td { "{y}" }
                                td { {fmt::degrees(rocket.rotation_angle)} }
                                td { "{delay}" }
                                td { {fmt::count(rocket.count)} }
                                td { "{period}" }
                                td { "{dest_x}" }
                                td { "{dest_y}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
