use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::{HomeBase, Spawning};

#[component]
pub fn HomeBasesTab(home_bases: Vec<HomeBase>) -> Element {
    if home_bases.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no home bases." }
        };
    }

    rsx! {
        div { class: "cards",
            for (i, base) in home_bases.iter().enumerate() {
                HomeBaseCard { index: i, base: base.clone() }
            }
        }
    }
}

#[component]
fn HomeBaseCard(index: usize, base: HomeBase) -> Element {
    let (x, y) = fmt::pos2(base.pos.as_ref());
    let belligerent_class = base
        .belligerent
        .as_ref()
        .map(|b| b.name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "card",
            h4 { class: "{belligerent_class}",
                "Home base #{index}: " {fmt::label(base.belligerent.as_ref())}
            }
            p { "Range: " {fmt::meters(base.range.map(f64::from))} }
            p { "Position: X {x}, Y {y}" }

            if let Some(friction) = &base.friction {
                p {
                    "Friction: " {fmt::yes_no(Some(friction.enabled))}
                    if let Some(value) = friction.value {
                        ", value {value}"
                    }
                }
            }

            if let Some(radar) = &base.radar {
                div { class: "sub-card",
                    h5 { "Radar" }
                    p { "Range: " {fmt::meters(radar.range.map(f64::from))} }
                    p { "Min height: " {fmt::meters(radar.min_height.map(f64::from))} }
                    p { "Max height: " {fmt::meters(radar.max_height.map(f64::from))} }
                }
            }

            if let Some(spawning) = &base.spawning {
                SpawningCard { spawning: spawning.clone() }
            }
        }
    }
}

#[component]
fn SpawningCard(spawning: Spawning) -> Element {
    rsx! {
        div { class: "sub-card",
            h5 { "Spawning" }
            p { "Enabled: " {fmt::yes_no(Some(spawning.enabled))} }
            p { "With parachutes: " {fmt::yes_no(Some(spawning.with_parachutes))} }
            p { "Max pilots: " {fmt::count(spawning.max_pilots)} }

            if let Some(in_air) = &spawning.in_air {
                p {
                    "In-air spawn: height " {fmt::meters(in_air.height.map(f64::from))}
                    ", speed " {fmt::count(in_air.speed)}
                    ", pause " {fmt::count(in_air.pause)}
                    ", always " {fmt::yes_no(Some(in_air.always))}
                    ", if deck is full " {fmt::yes_no(Some(in_air.if_deck_is_full))}
                }
            }
            if let Some(in_stationary) = &spawning.in_stationary {
                p {
                    "Stationary spawn: " {fmt::yes_no(Some(in_stationary.enabled))}
                    ", return to start position " {fmt::yes_no(Some(in_stationary.return_to_start_position))}
                }
            }

            if spawning.allowed_air_forces.is_empty() {
                p { "No allowed air forces." }
            } else {
                p { "Allowed air forces:" }
                ul {
                    for air_force in &spawning.allowed_air_forces {
                        li { "{air_force}" }
                    }
                }
            }

            if let Some(limitations) = &spawning.aircraft_limitations {
                p { "Aircraft limitations: " {fmt::yes_no(Some(limitations.enabled))} }
                p { "Consider lost: " {fmt::yes_no(Some(limitations.consider_lost))} }
                p { "Consider stationary: " {fmt::yes_no(Some(limitations.consider_stationary))} }
                if !limitations.allowed_aircrafts.is_empty() {
                    table { class: "table",
                        thead {
                            tr {
                                th { "Aircraft" }
                                th { "Limit" }
                                th { "Weapon limitations" }
                            }
                        }
                        tbody {
                            for aircraft in &limitations.allowed_aircrafts {
                                tr {
                                    td { "{aircraft.code}" }
                                    td { {fmt::count(aircraft.limit)} }
                                    td {
                                        if aircraft.weapon_limitations.is_empty() {
                                            "none"
                                        } else {
                                            {aircraft.weapon_limitations.join(", ")}
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
