use dioxus::prelude::*;

use crate::components::icons::MenuIcon;
use crate::components::{AmbientBackground, Sidebar, BRAND_NAME, SHELL_STYLES};
use crate::hooks::use_ambient_audio;
use crate::utils::is_live_session;
use crate::utils::navigation::{
    PAGE_HOME, PAGE_LIVE_SESSION, PAGE_LOGIN, PAGE_METAPHOR_FLOW, PAGE_MOOD_CHECKIN,
    PAGE_PROFILE, PAGE_PROGRESS, PAGE_SESSIONS, PAGE_SESSION_LOBBY,
};

pub mod home;
pub mod sessions;
pub mod profile;
pub mod live_session;
pub mod session_lobby;
pub mod metaphor_flow;
pub mod progress;
pub mod mood_checkin;
pub mod login;
pub mod not_found;

use home::Home;
use sessions::Sessions;
use profile::Profile;
use live_session::LiveSession;
use session_lobby::SessionLobby;
use metaphor_flow::MetaphorFlow;
use progress::Progress;
use mood_checkin::MoodCheckin;
use login::Login;
use not_found::NotFound;

/// App routes. Paths follow the page-name URL mapping (`/Home`, `/Sessions`, ...).
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[redirect("/", || Route::Home {})]
        #[route("/Home")]
        Home {},

        #[route("/Sessions")]
        Sessions {},

        #[route("/Profile")]
        Profile {},

        #[route("/LiveSession")]
        LiveSession {},

        #[route("/SessionLobby")]
        SessionLobby {},

        #[route("/MetaphorFlow")]
        MetaphorFlow {},

        #[route("/Progress")]
        Progress {},

        #[route("/MoodCheckin")]
        MoodCheckin {},

        #[redirect("/Logout", || Route::Login {})]
        #[route("/Login")]
        Login {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Page name of the routed page
    pub fn page_name(&self) -> &'static str {
        match self {
            Route::Home {} => PAGE_HOME,
            Route::Sessions {} => PAGE_SESSIONS,
            Route::Profile {} => PAGE_PROFILE,
            Route::LiveSession {} => PAGE_LIVE_SESSION,
            Route::SessionLobby {} => PAGE_SESSION_LOBBY,
            Route::MetaphorFlow {} => PAGE_METAPHOR_FLOW,
            Route::Progress {} => PAGE_PROGRESS,
            Route::MoodCheckin {} => PAGE_MOOD_CHECKIN,
            Route::Login {} => PAGE_LOGIN,
            Route::NotFound { .. } => "NotFound",
        }
    }

    /// Route for a page name, if the app serves it
    pub fn for_page(page_name: &str) -> Option<Route> {
        let route = match page_name {
            PAGE_HOME => Route::Home {},
            PAGE_SESSIONS => Route::Sessions {},
            PAGE_PROFILE => Route::Profile {},
            PAGE_LIVE_SESSION => Route::LiveSession {},
            PAGE_SESSION_LOBBY => Route::SessionLobby {},
            PAGE_METAPHOR_FLOW => Route::MetaphorFlow {},
            PAGE_PROGRESS => Route::Progress {},
            PAGE_MOOD_CHECKIN => Route::MoodCheckin {},
            PAGE_LOGIN => Route::Login {},
            _ => return None,
        };
        Some(route)
    }
}

/// What the shell derives from the current route on every render
#[derive(Clone, Debug, PartialEq)]
pub struct ShellView {
    pub current_path: String,
    pub is_live_session: bool,
}

impl ShellView {
    pub fn for_route(route: &Route) -> Self {
        let current_path = route.to_string();
        let is_live_session = is_live_session(route.page_name(), &current_path);
        Self {
            current_path,
            is_live_session,
        }
    }

    /// The ambient toggle cannot be used from inside a live session
    pub fn show_ambient_toggle(&self) -> bool {
        !self.is_live_session
    }
}

#[component]
fn AppShell() -> Element {
    let current_route = use_route::<Route>();
    let view = ShellView::for_route(&current_route);

    // Never persisted: every fresh mount starts with ambient sound on
    let mut ambient_enabled = use_signal(|| true);
    let mut sidebar_open = use_signal(|| false);

    let enabled = *ambient_enabled.read();
    use_ambient_audio(enabled, view.is_live_session);

    let toggle_ambient = move |_: ()| {
        let next = !*ambient_enabled.read();
        ambient_enabled.set(next);
        log::info!("Ambient sounds {}", if next { "enabled" } else { "disabled" });
    };

    rsx! {
        div {
            class: "min-h-screen relative overflow-hidden",

            style { "{SHELL_STYLES}" }

            AmbientBackground {}

            div {
                class: "flex w-full relative z-10",

                // Desktop sidebar
                aside {
                    class: "sidebar-glass border-r border-gray-200 w-64 flex-shrink-0 sticky top-0 h-screen hidden md:block",
                    Sidebar {
                        current_path: view.current_path.clone(),
                        ambient_enabled: enabled,
                        show_ambient_toggle: view.show_ambient_toggle(),
                        on_toggle_ambient: toggle_ambient,
                    }
                }

                // Mobile Sidebar Overlay
                if *sidebar_open.read() {
                    div {
                        class: "fixed inset-0 bg-black/50 z-40 md:hidden",
                        onclick: move |_| sidebar_open.set(false),

                        aside {
                            class: "sidebar-glass w-64 h-full",
                            onclick: move |e| e.stop_propagation(),
                            Sidebar {
                                current_path: view.current_path.clone(),
                                ambient_enabled: enabled,
                                show_ambient_toggle: view.show_ambient_toggle(),
                                on_toggle_ambient: toggle_ambient,
                                on_navigate: move |_: ()| sidebar_open.set(false),
                            }
                        }
                    }
                }

                main {
                    class: "flex-1 flex flex-col",

                    // Mobile header
                    header {
                        class: "glass-morphism border-b border-white/10 px-6 py-4 md:hidden",
                        div {
                            class: "flex items-center gap-4",
                            button {
                                class: "text-amber-dark hover:bg-white/10 p-2 rounded-lg transition-colors duration-200",
                                "aria-label": "Open navigation",
                                onclick: move |_| sidebar_open.set(true),
                                MenuIcon {}
                            }
                            h1 {
                                class: "text-xl font-semibold text-amber-dark",
                                "{BRAND_NAME}"
                            }
                        }
                    }

                    // Page Content
                    div {
                        class: "flex-1 overflow-auto",
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
