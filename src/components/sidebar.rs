use dioxus::prelude::*;

use crate::components::icons::{BrainIcon, NavGlyph, VolumeIcon, VolumeXIcon};
use crate::routes::Route;
use crate::utils::{NavigationItem, NAVIGATION_ITEMS};

pub const BRAND_NAME: &str = "Mind Shelter";
const BRAND_TAGLINE: &str = "Reflective Storytelling";

/// Sidebar contents: brand header, navigation list and footer greeting.
///
/// Rendered both in the fixed desktop column and in the mobile overlay.
#[component]
pub fn Sidebar(
    current_path: String,
    ambient_enabled: bool,
    show_ambient_toggle: bool,
    on_toggle_ambient: EventHandler<()>,
    #[props(default)] on_navigate: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "h-full flex flex-col",

            // Header
            div {
                class: "p-6 border-b border-gray-200",
                div {
                    class: "flex items-center justify-between",
                    div {
                        class: "flex items-center gap-3",
                        div {
                            class: "w-10 h-10 rounded-2xl bg-gradient-to-br from-blue-500 to-indigo-600 flex items-center justify-center",
                            BrainIcon { class: "w-6 h-6 text-white" }
                        }
                        div {
                            h2 {
                                class: "font-bold text-gray-900 text-lg",
                                "{BRAND_NAME}"
                            }
                            p {
                                class: "text-xs text-gray-600",
                                "{BRAND_TAGLINE}"
                            }
                        }
                    }

                    if show_ambient_toggle {
                        AmbientToggle {
                            enabled: ambient_enabled,
                            on_toggle: on_toggle_ambient,
                        }
                    }
                }
            }

            // Navigation
            div {
                class: "p-4 flex-1 overflow-y-auto",
                div {
                    class: "text-xs font-medium text-gray-600 uppercase tracking-wider px-2 py-2",
                    "Navigation"
                }
                nav {
                    class: "flex flex-col",
                    for item in NAVIGATION_ITEMS.iter() {
                        NavLink {
                            key: "{item.title}",
                            item: *item,
                            active: item.is_active(&current_path),
                            on_navigate: on_navigate,
                        }
                    }
                }
            }

            // Footer
            div {
                class: "border-t border-gray-200 p-6",
                div {
                    class: "flex items-center gap-3",
                    div {
                        class: "w-10 h-10 bg-gradient-to-r from-blue-500 to-indigo-600 rounded-full flex items-center justify-center",
                        span {
                            class: "text-white font-medium text-sm",
                            "U"
                        }
                    }
                    div {
                        class: "flex-1 min-w-0",
                        p {
                            class: "font-medium text-gray-900 text-sm truncate",
                            "Welcome"
                        }
                        p {
                            class: "text-xs text-gray-600 truncate",
                            "You're not alone"
                        }
                    }
                }
            }
        }
    }
}

/// Mute/unmute button for the ambient soundscape
#[component]
fn AmbientToggle(enabled: bool, on_toggle: EventHandler<()>) -> Element {
    let label = if enabled { "Mute ambient sounds" } else { "Play ambient sounds" };

    rsx! {
        button {
            class: "p-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition",
            title: "{label}",
            "aria-label": "{label}",
            "aria-pressed": "{enabled}",
            onclick: move |_| on_toggle.call(()),
            if enabled {
                VolumeIcon { class: "w-4 h-4" }
            } else {
                VolumeXIcon { class: "w-4 h-4" }
            }
        }
    }
}

// Navigation Link Component
#[component]
fn NavLink(item: NavigationItem, active: bool, on_navigate: Option<EventHandler<()>>) -> Element {
    let Some(to) = Route::for_page(item.page) else {
        log::warn!("No route for navigation entry {}", item.page);
        return rsx! {};
    };

    let active_class = if active { "bg-blue-50 text-blue-700 shadow-sm" } else { "" };

    rsx! {
        Link {
            to: to,
            class: "flex items-center gap-3 px-4 py-3 mb-2 rounded-xl text-gray-700 hover:bg-blue-50 hover:text-blue-700 transition-all duration-300 {active_class}",
            onclick: move |_| {
                if let Some(handler) = on_navigate {
                    handler.call(());
                }
            },
            NavGlyph { icon: item.icon }
            span {
                class: "font-medium",
                "{item.title}"
            }
        }
    }
}
