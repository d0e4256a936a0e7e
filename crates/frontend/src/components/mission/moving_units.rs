use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::group::group_by_type;
use mission_viewer_shared::models::MovingUnit;

#[component]
pub fn MovingUnitsTab(units: Vec<MovingUnit>) -> Element {
    if units.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no moving units." }
        };
    }

    let groups = match group_by_type(&units) {
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
                                th { "Skill" }
                                th { "Waiting time" }
                                th { "Route points" }
                            }
                        }
                        tbody {
                            for unit in &group.items {
                                tr {
                                    td { "{unit.id}" }
                                    td { "{unit.code}" }
                                    td { class: "{unit.belligerent.name}", "{unit.belligerent}" }
                                    td { {fmt::label(unit.skill.as_ref())} }
                                    td { {fmt::count(unit.waiting_time)} }
                                    td { "{unit.route.len()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
