pub mod buildings;
pub mod cameras;
pub mod conditions;
pub mod flights;
pub mod home_bases;
pub mod markers;
pub mod moving_units;
pub mod player;
pub mod rockets;
pub mod stationary;
pub mod targets;

use dioxus::prelude::*;

use mission_viewer_shared::models::Mission;

/// Fixed set of detail tabs. Selecting one swaps the rendered formatter
/// without refetching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Conditions,
    Player,
    Flights,
    MovingUnits,
    Stationary,
    Buildings,
    Rockets,
    Targets,
    Markers,
    HomeBases,
    Cameras,
}

impl Tab {
    pub const ALL: [Tab; 11] = [
        Tab::Conditions,
        Tab::Player,
        Tab::Flights,
        Tab::MovingUnits,
        Tab::Stationary,
        Tab::Buildings,
        Tab::Rockets,
        Tab::Targets,
        Tab::Markers,
        Tab::HomeBases,
        Tab::Cameras,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Conditions => "Conditions",
            Tab::Player => "Player",
            Tab::Flights => "Flights",
            Tab::MovingUnits => "Moving units",
            Tab::Stationary => "Stationary objects",
            Tab::Buildings => "Buildings",
            Tab::Rockets => "Rockets",
            Tab::Targets => "Targets",
            Tab::Markers => "Markers",
            Tab::HomeBases => "Home bases",
            Tab::Cameras => "Cameras",
        }
    }
}

#[component]
pub fn MissionView(mission: Mission) -> Element {
    let mut active_tab = use_signal(|| Tab::Conditions);
    let current = *active_tab.read();
    let data = mission.data.clone();

    let body = match current {
        Tab::Conditions => rsx! {
            conditions::ConditionsTab {
                conditions: data.conditions.clone(),
                location_loader: data.location_loader.clone(),
            }
        },
        Tab::Player => rsx! {
            player::PlayerTab { player: data.player.clone() }
        },
        Tab::Flights => rsx! {
            flights::FlightsTab { flights: data.objects.flights.clone() }
        },
        Tab::MovingUnits => rsx! {
            moving_units::MovingUnitsTab { units: data.objects.moving_units.clone() }
        },
        Tab::Stationary => rsx! {
            stationary::StationaryTab { objects: data.objects.stationary.clone() }
        },
        Tab::Buildings => rsx! {
            buildings::BuildingsTab { buildings: data.objects.buildings.clone() }
        },
        Tab::Rockets => rsx! {
            rockets::RocketsTab { rockets: data.objects.rockets.clone() }
        },
        Tab::Targets => rsx! {
            targets::TargetsTab { targets: data.objects.targets.clone() }
        },
        Tab::Markers => rsx! {
            markers::MarkersTab { markers: data.objects.markers.clone() }
        },
        Tab::HomeBases => rsx! {
            home_bases::HomeBasesTab { home_bases: data.objects.home_bases.clone() }
        },
        Tab::Cameras => rsx! {
            cameras::CamerasTab { cameras: data.objects.cameras.clone() }
        },
    };

    rsx! {
        section { class: "mission",
            header { class: "mission-header",
                h2 { "Mission details" }
                p { class: "file-name", "{mission.file_name}" }
            }
            nav { class: "tabs",
                for tab in Tab::ALL {
                    button {
                        class: if current == tab { "tab active" } else { "tab" },
                        onclick: move |_| active_tab.set(tab),
                        {tab.title()}
                    }
                }
            }
            div { class: "tab-body", {body} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tabs_are_distinct() {
        for (i, a) in Tab::ALL.iter().enumerate() {
            for b in &Tab::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_all_tabs_have_titles() {
        for tab in Tab::ALL {
            assert!(!tab.title().is_empty());
        }
    }

    #[test]
    fn test_tab_count_matches_detail_views() {
        assert_eq!(Tab::ALL.len(), 11);
    }
}
