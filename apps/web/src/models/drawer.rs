use serde::{Deserialize, Serialize};

/// Key value that dismisses the open drawer.
pub const CANCEL_KEY: &str = "Escape";

pub fn is_cancel_key(key: &str) -> bool {
    key == CANCEL_KEY
}

/// Open/closed state of the mobile drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Why the drawer is being closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Overlay,
    CancelKey,
    LinkActivated,
    CloseButton,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        matches!(self, DrawerState::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
    }

    /// Close the drawer. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = DrawerState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut drawer = DrawerState::Open;
        assert!(drawer.close());
        assert!(!drawer.close());
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn test_cancel_key() {
        assert!(is_cancel_key("Escape"));
        assert!(!is_cancel_key("Esc"));
        assert!(!is_cancel_key("Enter"));
    }
}
