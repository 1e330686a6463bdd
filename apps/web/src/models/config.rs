use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Width above which the inline desktop menu replaces the drawer.
pub const DESKTOP_BREAKPOINT: u32 = 991;
/// Scroll offset past which the bar turns translucent.
pub const SCROLL_THRESHOLD: u32 = 50;
/// Band at the top of the page inside which the bar is never hidden.
pub const REVEAL_ZONE: u32 = 100;

/// Layout strategy for the bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarVariant {
    /// In normal document flow, no scroll effects.
    Normal,
    /// Pinned to the top, turns translucent once scrolled.
    #[default]
    Sticky,
    /// Pinned to the top, translucent once scrolled, hides while scrolling down.
    StickyFlexible,
}

impl NavbarVariant {
    pub fn hides_on_scroll(self) -> bool {
        matches!(self, NavbarVariant::StickyFlexible)
    }

    pub fn tracks_scroll(self) -> bool {
        !matches!(self, NavbarVariant::Normal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub variant: NavbarVariant,
    pub breakpoint: u32,
    pub scroll_threshold: u32,
    pub reveal_zone: u32,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            variant: NavbarVariant::default(),
            breakpoint: DESKTOP_BREAKPOINT,
            scroll_threshold: SCROLL_THRESHOLD,
            reveal_zone: REVEAL_ZONE,
        }
    }
}

impl NavbarConfig {
    pub fn with_variant(variant: NavbarVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse a host-supplied JSON blob. Missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_site_constants() {
        let config = NavbarConfig::default();
        assert_eq!(config.variant, NavbarVariant::Sticky);
        assert_eq!(config.breakpoint, 991);
        assert_eq!(config.scroll_threshold, 50);
        assert_eq!(config.reveal_zone, 100);
    }

    #[test]
    fn test_from_json_partial() {
        let config = NavbarConfig::from_json(r#"{"variant": "sticky-flexible"}"#).unwrap();
        assert_eq!(config.variant, NavbarVariant::StickyFlexible);
        assert_eq!(config.breakpoint, DESKTOP_BREAKPOINT);
    }

    #[test]
    fn test_from_json_rejects_unknown_variant() {
        let err = NavbarConfig::from_json(r#"{"variant": "floating"}"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid navbar config"));
    }

    #[test]
    fn test_variant_scroll_behaviour() {
        assert!(!NavbarVariant::Normal.tracks_scroll());
        assert!(NavbarVariant::Sticky.tracks_scroll());
        assert!(!NavbarVariant::Sticky.hides_on_scroll());
        assert!(NavbarVariant::StickyFlexible.hides_on_scroll());
    }
}
