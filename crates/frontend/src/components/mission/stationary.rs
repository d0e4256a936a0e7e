use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::group::group_by_type;
use mission_viewer_shared::models::StationaryObject;

#[component]
pub fn StationaryTab(objects: Vec<StationaryObject>) -> Element {
    if objects.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no stationary objects." }
        };
    }

    let groups = match group_by_type(&objects) {
        Ok(groups) => groups,
        Err(error) => {
            return rsx! {
                div { class: "card error", "{error}" }
            };
        }
    };

    rsx! {
        div { class: "groups",
            for group in groups.values() {
                section { class: "group",
                    h4 { "{group.label}" }
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
                            for object in &group.items {
                                {
                                    let (x, y) = fmt::pos2(Some(&object.pos));
                                    rsx! {
                                        tr {
                                            td { "{object.id}" }
                                            td { "{object.code}" }
                                            td { class: "{object.belligerent.name}", "{object.belligerent}" }
                                            td { "{x}" }
                                            td { "{y}" }
                                            td { {fmt::degrees(object.rotation_angle)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
