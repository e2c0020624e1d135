/// Page names the application routes to
pub const PAGE_HOME: &str = "Home";
pub const PAGE_SESSIONS: &str = "Sessions";
pub const PAGE_PROFILE: &str = "Profile";
pub const PAGE_LIVE_SESSION: &str = "LiveSession";
pub const PAGE_SESSION_LOBBY: &str = "SessionLobby";
pub const PAGE_METAPHOR_FLOW: &str = "MetaphorFlow";
pub const PAGE_PROGRESS: &str = "Progress";
pub const PAGE_MOOD_CHECKIN: &str = "MoodCheckin";
pub const PAGE_LOGIN: &str = "Login";

/// Map a page name to its URL: a leading slash, spaces become hyphens.
///
/// Case is preserved, so `"Home"` maps to `"/Home"`.
pub fn create_page_url(page_name: &str) -> String {
    format!("/{}", page_name.replace(' ', "-"))
}

/// Live sessions are detected by page name or by the path mentioning one
pub fn is_live_session(page_name: &str, path: &str) -> bool {
    page_name == PAGE_LIVE_SESSION || path.contains(PAGE_LIVE_SESSION)
}

/// Glyph shown next to a navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Calendar,
    User,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: &'static str,
    pub page: &'static str,
    pub icon: NavIcon,
}

impl NavigationItem {
    pub fn url(&self) -> String {
        create_page_url(self.page)
    }

    /// Exact match against the router's current path
    pub fn is_active(&self, current_path: &str) -> bool {
        self.url() == current_path
    }
}

/// Sidebar entries in display order
pub static NAVIGATION_ITEMS: [NavigationItem; 3] = [
    NavigationItem {
        title: "Explore Realms",
        page: PAGE_HOME,
        icon: NavIcon::Home,
    },
    NavigationItem {
        title: "My Sessions",
        page: PAGE_SESSIONS,
        icon: NavIcon::Calendar,
    },
    NavigationItem {
        title: "Profile",
        page: PAGE_PROFILE,
        icon: NavIcon::User,
    },
];
