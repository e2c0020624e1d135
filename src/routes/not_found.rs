use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let subtitle = format!("Nothing lives at /{}.", segments.join("/"));

    rsx! {
        PageFrame {
            title: "Page not found",
            subtitle: subtitle,
            Link {
                to: Route::Home {},
                class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                "Back to realms"
            }
        }
    }
}
