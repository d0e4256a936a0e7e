use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Target;

#[component]
pub fn TargetsTab(targets: Vec<Target>) -> Element {
    if targets.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no targets." }
        };
    }

    rsx! {
        div { class: "cards",
            for (i, target) in targets.iter().enumerate() {
                {
                    let (x, y) = fmt::pos2(target.pos.as_ref());
                    rsx! {
                        div { class: "card",
                            h4 { "Target #{i}: {target.target_type}" }
                            p { "Priority: {target.priority}" }
                            p { "Sleep mode: " {fmt::yes_no(Some(target.in_sleep_mode))} }
                            p { "Delay: " {fmt::minutes(target.delay.map(f64::from))} }
                            p { "Radius: " {fmt::meters(target.radius.map(f64::from))} }
                            p { "Destruction level: " {fmt::count(target.destruction_level)} }
                            p { "Requires landing: " {fmt::yes_no(target.requires_landing)} }
                            p { "Position: X {x}, Y {y}" }
                            if let Some(object) = &target.object {
                                {
                                    let (ox, oy) = fmt::pos2(object.pos.as_ref());
                                    rsx! {
                                        div { class: "sub-card",
                                            h5 { "Object" }
                                            p { "ID: {object.id}" }
                                            p { "Waypoint: " {fmt::count(object.waypoint)} }
                                            p { "Position: X {ox}, Y {oy}" }
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
