use serde::{Deserialize, Serialize};

use super::config::DESKTOP_BREAKPOINT;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportMode {
    /// Drawer layout; the bar stays in its default look.
    #[default]
    Compact,
    /// Inline menu; scroll effects apply.
    Desktop,
}

impl ViewportMode {
    pub fn classify(width: u32) -> Self {
        Self::classify_with(width, DESKTOP_BREAKPOINT)
    }

    pub fn classify_with(width: u32, breakpoint: u32) -> Self {
        if width > breakpoint {
            ViewportMode::Desktop
        } else {
            ViewportMode::Compact
        }
    }

    pub fn is_desktop(self) -> bool {
        matches!(self, ViewportMode::Desktop)
    }
}

/// A change of layout mode caused by a resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    EnteredDesktop,
    FellBackToCompact,
}

impl ModeChange {
    pub fn between(from: ViewportMode, to: ViewportMode) -> Option<Self> {
        match (from, to) {
            (ViewportMode::Compact, ViewportMode::Desktop) => Some(ModeChange::EnteredDesktop),
            (ViewportMode::Desktop, ViewportMode::Compact) => Some(ModeChange::FellBackToCompact),
            _ => None,
        }
    }
}
