use dioxus::prelude::*;

use mission_viewer_shared::fmt;
use mission_viewer_shared::models::Player;

#[component]
pub fn PlayerTab(player: Option<Player>) -> Element {
    let Some(player) = player else {
        return rsx! {
            div { class: "card empty", "Mission has no player info." }
        };
    };

    rsx! {
        div { class: "card",
            p { "Belligerent: " {fmt::label(player.belligerent.as_ref())} }
            p { "Flight ID: " {fmt::text(player.flight_id.as_deref())} }
            p { "Aircraft index: " {fmt::count(player.aircraft_index)} }
            p {
                if player.fixed_weapons {
                    "Weapons are fixed"
                } else {
                    "Weapons are not fixed"
                }
            }
        }
    }
}
