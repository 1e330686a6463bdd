use serde::{Deserialize, Serialize};

use super::config::{REVEAL_ZONE, SCROLL_THRESHOLD};

/// Scroll-derived state of the bar.
///
/// `past_threshold` always reflects the most recent sample; `visible` only
/// moves when the page scrolls in a definite direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub last_position: u32,
    pub past_threshold: bool,
    pub visible: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            last_position: 0,
            past_threshold: false,
            visible: true,
        }
    }
}

impl ScrollState {
    /// Feed one vertical scroll offset, using the site's default thresholds.
    pub fn sample(&mut self, y: u32) {
        self.sample_with(y, SCROLL_THRESHOLD, REVEAL_ZONE);
    }

    pub fn sample_with(&mut self, y: u32, threshold: u32, reveal_zone: u32) {
        self.past_threshold = y > threshold;

        if y < self.last_position || y < reveal_zone {
            self.visible = true;
        } else if y > self.last_position && y > reveal_zone {
            self.visible = false;
        }
        // Equal offset (or exactly at the zone edge with no movement) keeps
        // the current visibility.

        self.last_position = y;
    }

    /// Back to the default look: opaque and shown. `last_position` is kept so
    /// the next sample still has a direction to compare against.
    pub fn reset(&mut self) {
        self.past_threshold = false;
        self.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible_and_opaque() {
        let state = ScrollState::default();
        assert!(state.visible);
        assert!(!state.past_threshold);
        assert_eq!(state.last_position, 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut state = ScrollState::default();
        state.sample(50);
        assert!(!state.past_threshold);
        state.sample(51);
        assert!(state.past_threshold);
    }

    #[test]
    fn test_hides_only_past_reveal_zone() {
        let mut state = ScrollState::default();
        state.sample(80);
        state.sample(100);
        assert!(state.visible);
        state.sample(101);
        assert!(!state.visible);
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let mut state = ScrollState::default();
        state.sample(400);
        assert!(!state.visible);
        state.sample(390);
        assert!(state.visible);
    }

    #[test]
    fn test_equal_sample_keeps_visibility() {
        let mut state = ScrollState::default();
        state.sample(300);
        assert!(!state.visible);
        state.sample(300);
        assert!(!state.visible);

        state.sample(250);
        state.sample(250);
        assert!(state.visible);
    }

    #[test]
    fn test_exact_zone_edge_without_movement() {
        let mut state = ScrollState {
            last_position: 100,
            past_threshold: true,
            visible: false,
        };
        state.sample(100);
        assert!(!state.visible);
        assert_eq!(state.last_position, 100);
    }

    #[test]
    fn test_reset_keeps_position() {
        let mut state = ScrollState::default();
        state.sample(700);
        state.reset();
        assert!(state.visible);
        assert!(!state.past_threshold);
        assert_eq!(state.last_position, 700);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut state = ScrollState::default();
        state.sample_with(30, 20, 40);
        assert!(state.past_threshold);
        assert!(state.visible);
        state.sample_with(45, 20, 40);
        assert!(!state.visible);
    }
}
