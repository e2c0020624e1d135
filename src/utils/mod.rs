// Utility functions
// Helper functions for common operations

pub mod navigation;

pub use navigation::{is_live_session, NavIcon, NavigationItem, NAVIGATION_ITEMS};
