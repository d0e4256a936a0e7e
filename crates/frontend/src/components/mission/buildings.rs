use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Building;

#[component]
pub fn BuildingsTab(buildings: Vec<Building>) -> Element {
    if buildings.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no buildings." }
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
                }
            }
            tbody {
                for building in &buildings {
                    {
                        let (x, y) = fmt::pos2(Some(&building.pos));
                        rsx! {
                            tr {
                                td { "{building.id}" }
                                td { "{building.code}" }
                                td { class: "{building.belligerent.name}", "{building.belligerent}" }
                                td { "{x}" }
                                td { "{y}" }
                                td { {fmt::degrees(building.rotation_angle)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
