use dioxus::prelude::*;

use crate::components::PageFrame;

#[component]
pub fn MoodCheckin() -> Element {
    rsx! {
        PageFrame {
            title: "Mood Check-in",
            subtitle: "How are you feeling today?",
            p {
                class: "text-amber-light",
                "Take a breath, then rate your mood from 1 to 10."
            }
        }
    }
}
