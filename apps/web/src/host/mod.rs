//! Scoped access to the page-global resources the navbar touches: window
//! scroll/resize listeners, the body scroll lock and a document-level
//! keydown listener.

mod dom;

pub use dom::{BrowserDocument, DomListener};

use crate::errors::Result;
use crate::models::is_cancel_key;

/// Window signals the navbar follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    Scroll,
    Resize,
}

impl WindowEvent {
    pub fn name(self) -> &'static str {
        match self {
            WindowEvent::Scroll => "scroll",
            WindowEvent::Resize => "resize",
        }
    }
}

/// The page operations the navbar relies on.
pub trait DocumentHost: Clone + 'static {
    /// Handle for a registered listener.
    type Listener;

    /// Window inner width in pixels.
    fn viewport_width(&self) -> u32;

    /// Window vertical scroll offset in pixels.
    fn scroll_offset(&self) -> u32;

    /// Suppress page scrolling. Returns the inline overflow value to put back.
    fn lock_scroll(&self) -> Result<String>;

    fn restore_scroll(&self, previous: &str);

    fn listen_keydown(&self, handler: Box<dyn Fn(&str)>) -> Result<Self::Listener>;

    /// Register a passive window listener.
    fn listen_window(&self, event: WindowEvent, handler: Box<dyn Fn()>) -> Result<Self::Listener>;

    fn unlisten(&self, listener: Self::Listener);
}

/// Page scroll suppressed for as long as this value lives.
pub struct ScrollLock<H: DocumentHost> {
    host: H,
    previous: String,
}

impl<H: DocumentHost> ScrollLock<H> {
    pub fn acquire(host: &H) -> Result<Self> {
        let previous = host.lock_scroll()?;
        Ok(Self {
            host: host.clone(),
            previous,
        })
    }
}

impl<H: DocumentHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        self.host.restore_scroll(&self.previous);
    }
}

/// A registered listener, removed when dropped.
pub struct Listening<H: DocumentHost> {
    host: H,
    listener: Option<H::Listener>,
}

impl<H: DocumentHost> Listening<H> {
    pub fn keydown(host: &H, handler: impl Fn(&str) + 'static) -> Result<Self> {
        let listener = host.listen_keydown(Box::new(handler))?;
        Ok(Self::new(host, listener))
    }

    pub fn window(host: &H, event: WindowEvent, handler: impl Fn() + 'static) -> Result<Self> {
        let listener = host.listen_window(event, Box::new(handler))?;
        Ok(Self::new(host, listener))
    }

    fn new(host: &H, listener: H::Listener) -> Self {
        Self {
            host: host.clone(),
            listener: Some(listener),
        }
    }
}

impl<H: DocumentHost> Drop for Listening<H> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.host.unlisten(listener);
        }
    }
}

/// Everything held while the drawer is open. Dropping the session, on close
/// or on unmount, gives the page back its scrolling and detaches the
/// cancel-key listener.
pub struct DrawerSession<H: DocumentHost> {
    _cancel_key: Listening<H>,
    _scroll_lock: ScrollLock<H>,
}

impl<H: DocumentHost> DrawerSession<H> {
    /// `on_cancel` runs whenever the cancel key is pressed while the session lives.
    pub fn acquire(host: &H, on_cancel: impl Fn() + 'static) -> Result<Self> {
        // A failed listener registration drops the lock taken just before it.
        let scroll_lock = ScrollLock::acquire(host)?;
        let cancel_key = Listening::keydown(host, move |key| {
            if is_cancel_key(key) {
                on_cancel();
            }
        })?;

        log::debug!("drawer session acquired");
        Ok(Self {
            _cancel_key: cancel_key,
            _scroll_lock: scroll_lock,
        })
    }
}

impl<H: DocumentHost> Drop for DrawerSession<H> {
    fn drop(&mut self) {
        log::debug!("drawer session released");
    }
}
