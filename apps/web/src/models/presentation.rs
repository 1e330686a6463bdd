use super::config::NavbarVariant;
use super::navbar::NavbarState;
use super::viewport::ViewportMode;

const NAV_BASE: &str = "left-0 right-0 bg-white transition-all duration-300 ease-in-out text-black px-5 min-[440px]:px-14 z-[11]";
const DRAWER_BASE: &str = "fixed top-0 right-0 h-full w-80 bg-white shadow-2xl z-[70] transform transition-transform duration-300 ease-in-out min-[991px]:hidden";
const ENTRY_BASE: &str = "rounded-[4px] px-2 py-2 flex items-center justify-center";

/// Visual flags consumed by the styling layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub variant: NavbarVariant,
    pub mode: ViewportMode,
    pub visible: bool,
    pub translucent: bool,
    pub drawer_open: bool,
}

impl Presentation {
    pub fn new(state: &NavbarState) -> Self {
        let variant = state.config().variant;
        let scroll = state.scroll();
        // Scroll-driven styling never leaks into the compact layout.
        let desktop = state.mode().is_desktop();

        Self {
            variant,
            mode: state.mode(),
            visible: !desktop || !variant.hides_on_scroll() || scroll.visible,
            translucent: desktop && variant.tracks_scroll() && scroll.past_threshold,
            drawer_open: state.drawer().is_open(),
        }
    }

    pub fn nav_class(&self) -> String {
        // Only the wide layout may take the bar out of the page flow.
        let position = match (self.variant, self.mode) {
            (NavbarVariant::Normal, _) => "relative",
            (NavbarVariant::StickyFlexible, ViewportMode::Desktop) => "fixed top-0",
            (_, _) => "sticky top-0",
        };
        let surface = if self.translucent {
            "bg-white/80 backdrop-blur-md shadow-md"
        } else {
            ""
        };
        let offset = if self.visible {
            "translate-y-0"
        } else {
            "-translate-y-full"
        };
        join_classes(&[position, NAV_BASE, surface, offset])
    }

    pub fn drawer_class(&self) -> String {
        let slide = if self.drawer_open {
            "translate-x-0"
        } else {
            "translate-x-full"
        };
        format!("{} {}", DRAWER_BASE, slide)
    }

    pub fn overlay_shown(&self) -> bool {
        self.drawer_open
    }
}

/// Class for one desktop menu item; the last item carries no divider.
pub fn entry_class(active: bool, last: bool) -> String {
    let divider = if last { "" } else { "border-r border-gray-500" };
    let highlight = if active { "bg-brand-yellow text-black" } else { "" };
    join_classes(&[ENTRY_BASE, divider, highlight])
}

fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Class for one drawer link.
pub fn drawer_link_class(active: bool, external: bool) -> &'static str {
    match (active, external) {
        (_, true) => "block px-6 py-3 font-bold text-brand-blue underline",
        (true, false) => "block px-6 py-3 text-black bg-brand-yellow",
        (false, false) => "block px-6 py-3 text-gray-700",
    }
}
