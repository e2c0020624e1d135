use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        PageFrame {
            title: "Profile",
            subtitle: "Your preferences and how you have been feeling.",
            Link {
                to: Route::MoodCheckin {},
                class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                "Daily mood check-in"
            }
        }
    }
}
