use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Conditions;

#[component]
pub fn ConditionsTab(conditions: Conditions, location_loader: Option<String>) -> Element {
    rsx! {
        div { class: "cards",
            div { class: "card",
                h4 { "Location" }
                p { {fmt::text(location_loader.as_deref())} }
            }

            if let Some(time_info) = &conditions.time_info {
                div { class: "card",
                    h4 { "Date and time" }
                    p { "Date: {time_info.date}" }
                    p { "Time: {time_info.time}" }
                    p {
                        if time_info.is_fixed {
                            "Time is fixed"
                        } else {
                            "Time is not fixed"
                        }
                    }
                }
            }

            if let Some(meteorology) = &conditions.meteorology {
                div { class: "card",
                    h4 { "Meteorology" }
                    p { "Weather: {meteorology.weather}" }
                    p { "Gust: {meteorology.gust}" }
                    p { "Turbulence: {meteorology.turbulence}" }
                    p { "Cloud base: " {fmt::meters(meteorology.cloud_base)} }
                    if let Some(wind) = &meteorology.wind {
                        p { "Wind: {wind.speed} m/s from {wind.direction}\u{00b0}" }
                    } else {
                        p { "Wind: N/A" }
                    }
                }
            }

            if let Some(communication) = &conditions.communication {
                div { class: "card",
                    h4 { "Communication" }
                    p { "Tower communication: " {fmt::yes_no(Some(communication.tower_communication))} }
                    p { "Vectoring: " {fmt::yes_no(Some(communication.vectoring))} }
                    p { "Radio silence for AI: " {fmt::yes_no(Some(communication.ai_radio_silence))} }
                }
            }

            if let Some(radar) = &conditions.radar {
                div { class: "card",
                    h4 { "Radar" }
                    p { "Advanced mode: " {fmt::yes_no(Some(radar.advanced_mode))} }
                    p { "Refresh interval: " {fmt::count(radar.refresh_interval)} }
                    if let Some(ships) = &radar.ships {
                        p { "Ships as radars: " {fmt::yes_no(Some(ships.treat_as_radar))} }
                        p {
                            "Big ships: range {ships.big.max_range} m, "
                            "height {ships.big.min_height}\u{2013}{ships.big.max_height} m"
                        }
                        p {
                            "Small ships: range {ships.small.max_range} m, "
                            "height {ships.small.min_height}\u{2013}{ships.small.max_height} m"
                        }
                    }
                    if let Some(scouts) = &radar.scouts {
                        p { "Scouts as radars: " {fmt::yes_no(Some(scouts.treat_as_radar))} }
                        p { "Scout range: {scouts.max_range} m up to {scouts.max_height} m" }
                    }
                }
            }

            if let Some(scouting) = &conditions.scouting {
                div { class: "card",
                    h4 { "Scouting" }
                    p { "Ships can spot enemy planes with their radars: " {fmt::yes_no(Some(scouting.ships_affect_radar))} }
                    p { "Scout planes can spot ground units: " {fmt::yes_no(Some(scouting.scouts_affect_radar))} }
                    p { "Only scout planes can complete recon targets: " {fmt::yes_no(Some(scouting.only_scouts_complete_targets))} }
                    if let Some(scouts) = &scouting.scouts {
                        for entry in scouts {
                            div { class: "sub-card",
                                h5 { "Scouts for {entry.belligerent}" }
                                ul {
                                    for aircraft in &entry.aircrafts {
                                        li { "{aircraft}" }
                                    }
                                }
                            }
                        }
                    } else {
                        p { "Lists of scout planes are not defined." }
                    }
                }
            }

            if let Some(respawn_time) = &conditions.respawn_time {
                div { class: "card",
                    h4 { "Respawn time" }
                    p { "Big ships: {respawn_time.ships.big} s" }
                    p { "Small ships: {respawn_time.ships.small} s" }
                    p { "Balloons: {respawn_time.balloons} s" }
                    p { "Artillery: {respawn_time.artillery} s" }
                    p { "Searchlights: {respawn_time.searchlights} s" }
                }
            }

            if let Some(craters) = &conditions.crater_visibility_multipliers {
                div { class: "card",
                    h4 { "Crater visibility multipliers" }
                    p { "Weapon weight \u{2264} 100 kg: x{craters.le_100kg}" }
                    p { "Weapon weight \u{2264} 1000 kg: x{craters.le_1000kg}" }
                    p { "Weapon weight > 1000 kg: x{craters.gt_1000kg}" }
                }
            }
        }
    }
}
