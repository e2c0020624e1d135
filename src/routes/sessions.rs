use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

#[component]
pub fn Sessions() -> Element {
    rsx! {
        PageFrame {
            title: "My Sessions",
            subtitle: "Your upcoming and past storytelling circles.",
            div {
                class: "flex gap-4",
                Link {
                    to: Route::SessionLobby {},
                    class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                    "Go to lobby"
                }
                Link {
                    to: Route::Progress {},
                    class: "px-4 py-2 rounded-xl text-amber-light hover:bg-white/10",
                    "View progress"
                }
            }
        }
    }
}
