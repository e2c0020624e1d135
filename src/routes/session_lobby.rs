use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

#[component]
pub fn SessionLobby() -> Element {
    rsx! {
        PageFrame {
            title: "Session Lobby",
            subtitle: "Settle in while the others arrive.",
            Link {
                to: Route::LiveSession {},
                class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                "Join the circle"
            }
        }
    }
}
