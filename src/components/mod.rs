// UI Components
// Building blocks of the app shell

pub mod ambient_background;
pub mod icons;
pub mod page_frame;
pub mod sidebar;

pub use ambient_background::{AmbientBackground, SHELL_STYLES};
pub use page_frame::PageFrame;
pub use sidebar::{Sidebar, BRAND_NAME};
