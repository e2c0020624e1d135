use dioxus::prelude::*;

use crate::components::PageFrame;
use crate::routes::Route;

/// Sign-in landing page. There is no account backend, so it only leads on
/// to the realms; `/Logout` redirects here.
#[component]
pub fn Login() -> Element {
    rsx! {
        PageFrame {
            title: "Welcome to Mind Shelter",
            subtitle: "A quiet place to share stories with people who understand.",
            Link {
                to: Route::Home {},
                class: "px-4 py-2 rounded-xl bg-blue-50 text-blue-700 font-medium",
                "Continue"
            }
        }
    }
}
