mod config;
mod drawer;
mod navbar;
mod presentation;
mod route;
mod scroll;
mod viewport;

pub use config::{NavbarConfig, NavbarVariant, DESKTOP_BREAKPOINT, REVEAL_ZONE, SCROLL_THRESHOLD};
pub use drawer::{is_cancel_key, CloseReason, DrawerState, CANCEL_KEY};
pub use navbar::{NavbarEvent, NavbarState};
pub use presentation::{drawer_link_class, entry_class, Presentation};
pub use route::{desktop_entries, drawer_entries, is_active, NavEntry};
pub use scroll::ScrollState;
pub use viewport::{ModeChange, ViewportMode};
