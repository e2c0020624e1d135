use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

// Ambient sounds stay off on this route
#[component]
pub fn LiveSession() -> Element {
    rsx! {
        PageFrame {
            title: "Live Session",
            subtitle: "You're in a live storytelling circle. Background sounds are paused.",
            Link {
                to: Route::Sessions {},
                class: "px-4 py-2 rounded-xl text-amber-light hover:bg-white/10",
                "Leave session"
            }
        }
    }
}
