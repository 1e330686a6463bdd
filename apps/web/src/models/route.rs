use serde::{Deserialize, Serialize};

/// Whether a menu entry pointing at `path` should be highlighted while the
/// router is at `current`. The root only matches itself; every other path
/// also matches the routes nested under it.
pub fn is_active(path: &str, current: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current.starts_with(path)
    }
}

/// One link in the bar or the drawer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Absolute links leave the site and bypass the router.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }

    pub fn is_active(&self, current: &str) -> bool {
        !self.is_external() && is_active(&self.href, current)
    }
}

const SYLLABUS_URL: &str = "https://blog.icepcssinstitute.com/css-syllabus";

/// Inline menu shown above the breakpoint.
pub fn desktop_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Home", "/"),
        NavEntry::new("Courses", "/#courses-section"),
        NavEntry::new("Syllabus", SYLLABUS_URL),
        NavEntry::new("Stories", "/#success-stories-section"),
        NavEntry::new("Papers", "/past-papers"),
        NavEntry::new("Magazines", "/magazines"),
        NavEntry::new("Notes", "/notes"),
        NavEntry::new("Summaries", "/book-summaries"),
        NavEntry::new("Contact", "/contact"),
    ]
}

/// Shorter list used in the mobile drawer.
pub fn drawer_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Home", "/"),
        NavEntry::new("CSS Syllabus", SYLLABUS_URL),
        NavEntry::new("Past Papers", "/past-papers"),
        NavEntry::new("Contact", "/contact"),
    ]
}
