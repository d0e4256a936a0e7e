use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::{Flight, RoutePoint};

#[component]
pub fn FlightsTab(flights: Vec<Flight>) -> Element {
    if flights.is_empty() {
        return rsx! {
            div { class: "card empty", "Mission has no flights." }
        };
    }

    rsx! {
        div { class: "cards",
            for flight in flights {
                FlightCard { flight }
            }
        }
    }
}

#[component]
fn FlightCard(flight: Flight) -> Element {
    let fuel = flight
        .fuel
        .map(|f| format!("{f} %"))
        .unwrap_or_else(|| fmt::NA.to_string());

    rsx! {
        div { class: "card",
            h4 { "Flight {flight.id}" }
            p { "Air force: " {fmt::label(flight.air_force.as_ref())} }
            p { "Regiment: " {fmt::text(flight.regiment.as_deref())} }
            p { "Squadron: " {fmt::count(flight.squadron_index)} }
            p { "Flight index: " {fmt::count(flight.flight_index)} }
            p { "Aircraft code: " {fmt::text(flight.code.as_deref())} }
            p { "Aircrafts: " {fmt::count(flight.count)} }
            p { "Fuel: {fuel}" }
            p { "Weapons: " {fmt::text(flight.weapons.as_deref())} }
            p { "AI only: " {fmt::yes_no(flight.ai_only)} }
            p { "With parachutes: " {fmt::yes_no(flight.with_parachutes)} }

            if flight.route.is_empty() {
                p { "No route points." }
            } else {
                RouteTable { route: flight.route.clone() }
            }
        }
    }
}

/// One-line summary of the optional route point details the service may
/// attach (takeoff delays, patrol patterns, attack targets).
fn route_point_extras(point: &RoutePoint) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(delay) = point.delay {
        parts.push(format!("delay {delay} min"));
    }
    if let Some(spacing) = point.spacing {
        parts.push(format!("spacing {spacing} m"));
    }
    if let Some(cycles) = point.patrol_cycles {
        parts.push(format!("{cycles} patrol cycles"));
    }
    if let Some(timeout) = point.patrol_timeout {
        parts.push(format!("patrol timeout {timeout} min"));
    }
    if let Some(angle) = point.pattern_angle {
        parts.push(format!("pattern angle {angle}\u{00b0}"));
    }
    if let Some(target_id) = &point.target_id {
        let waypoint = point.target_route_point.unwrap_or(0);
        parts.push(format!("target {target_id} at point {waypoint}"));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[component]
fn RouteTable(route: Vec<RoutePoint>) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "#" }
                    th { "Type" }
                    th { "X, m" }
                    th { "Y, m" }
                    th { "Z, m" }
                    th { "Speed" }
                    th { "Formation" }
                    th { "Radio silence" }
                    th { "Extra" }
                }
            }
            tbody {
                for (i, point) in route.iter().enumerate() {
                    {
                        let (x, y, z) = fmt::pos3(Some(&point.pos));
                        let speed = point
                            .speed
                            .map(|s| format!("{s} km/h"))
                            .unwrap_or_else(|| fmt::NA.to_string());
                        let formation = point
                            .formation
                            .as_ref()
                            .map(|f| f.verbose_name.clone())
                            .unwrap_or_else(|| "default".to_string());
                        let extras = route_point_extras(point).unwrap_or_default();
                        rsx! {
                            tr {
                                td { "{i}" }
                                td { "{point.kind}" }
                                td { "{x}" }
                                td { "{y}" }
                                td { "{z}" }
                                td { "{speed}" }
                                td { "{formation}" }
                                td {
                                    if point.radio_silence {
                                        "yes"
                                    } else {
                                        "no"
                                    }
                                }
                                td { "{extras}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_viewer_shared::models::{Label, Pos3};

    fn bare_point() -> RoutePoint {
        RoutePoint {
            kind: Label {
                name: "normal".to_string(),
                verbose_name: "Normal flight".to_string(),
                help_text: None,
            },
            pos: Pos3 { x: 0.0, y: 0.0, z: 500.0 },
            speed: None,
            formation: None,
            radio_silence: false,
            delay: None,
            spacing: None,
            patrol_cycles: None,
            patrol_timeout: None,
            pattern_angle: None,
            pattern_side_size: None,
            pattern_altitude_difference: None,
            target_id: None,
            target_route_point: None,
        }
    }

    #[test]
    fn test_plain_point_has_no_extras() {
        assert_eq!(route_point_extras(&bare_point()), None);
    }

    #[test]
    fn test_takeoff_extras() {
        let mut point = bare_point();
        point.delay = Some(10);
        point.spacing = Some(20);
        assert_eq!(
            route_point_extras(&point).unwrap(),
            "delay 10 min, spacing 20 m"
        );
    }

    #[test]
    fn test_attack_target_extras() {
        let mut point = bare_point();
        point.target_id = Some("0_Chief".to_string());
        point.target_route_point = Some(2);
        assert_eq!(
            route_point_extras(&point).unwrap(),
            "target 0_Chief at point 2"
        );
    }

    #[test]
    fn test_patrol_extras() {
        let mut point = bare_point();
        point.patrol_cycles = Some(1);
        point.patrol_timeout = Some(5);
        point.pattern_angle = Some(25.0);
        let extras = route_point_extras(&point).unwrap();
        assert!(extras.contains("1 patrol cycles"));
        assert!(extras.contains("patrol timeout 5 min"));
        assert!(extras.contains("pattern angle 25"));
    }
}
