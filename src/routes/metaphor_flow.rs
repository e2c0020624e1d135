use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

#[component]
pub fn MetaphorFlow() -> Element {
    rsx! {
        PageFrame {
            title: "Metaphor Flow",
            subtitle: "Choose a metaphor to carry your story into the circle.",
            Link {
                to: Route::SessionLobby {},
                class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                "Continue to lobby"
            }
        }
    }
}
