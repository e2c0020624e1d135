use dioxus::prelude::*;

use crate::components::PageFrame;

#[component]
pub fn Progress() -> Element {
    rsx! {
        PageFrame {
            title: "Your Progress",
            subtitle: "Completed sessions and mood changes over time.",
            p {
                class: "text-amber-light",
                "Your progress appears here after your first completed circle."
            }
        }
    }
}
