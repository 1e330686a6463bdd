use super::config::NavbarConfig;
use super::drawer::{CloseReason, DrawerState};
use super::scroll::ScrollState;
use super::viewport::{ModeChange, ViewportMode};

/// Discrete inputs delivered by the host environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarEvent {
    /// Window vertical offset in pixels.
    Scrolled(u32),
    /// Window inner width in pixels.
    Resized(u32),
    ToggleDrawer,
    CloseDrawer(CloseReason),
}

/// Complete interaction state of one navbar instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    config: NavbarConfig,
    scroll: ScrollState,
    mode: ViewportMode,
    drawer: DrawerState,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self::new(NavbarConfig::default())
    }
}

impl NavbarState {
    /// Fresh state: compact layout until the first width reading, drawer closed.
    pub fn new(config: NavbarConfig) -> Self {
        Self {
            config,
            scroll: ScrollState::default(),
            mode: ViewportMode::Compact,
            drawer: DrawerState::Closed,
        }
    }

    pub fn config(&self) -> &NavbarConfig {
        &self.config
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    /// Whether the page should be scroll-locked. The drawer is hidden above
    /// the breakpoint, so an open drawer only locks the compact layout.
    pub fn locks_page(&self) -> bool {
        self.drawer.is_open() && !self.mode.is_desktop()
    }

    /// Apply one event. Returns whether anything changed.
    pub fn apply(&mut self, event: NavbarEvent) -> bool {
        let before = *self;
        match event {
            NavbarEvent::Scrolled(y) => self.on_scroll(y),
            NavbarEvent::Resized(width) => {
                self.on_resize(width);
            }
            NavbarEvent::ToggleDrawer => self.drawer.toggle(),
            NavbarEvent::CloseDrawer(_) => {
                self.drawer.close();
            }
        }
        before != *self
    }

    fn on_scroll(&mut self, y: u32) {
        // Compact layout keeps the bar in normal flow.
        if !self.mode.is_desktop() {
            return;
        }
        self.scroll
            .sample_with(y, self.config.scroll_threshold, self.config.reveal_zone);
    }

    /// Reclassify the layout for a new width and report any mode change.
    pub fn on_resize(&mut self, width: u32) -> Option<ModeChange> {
        let next = ViewportMode::classify_with(width, self.config.breakpoint);
        let change = ModeChange::between(self.mode, next);
        if change == Some(ModeChange::FellBackToCompact) {
            self.scroll.reset();
        }
        self.mode = next;
        change
    }
}
