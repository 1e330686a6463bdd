use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, KeyboardEvent, Window};

use super::{DocumentHost, WindowEvent};
use crate::errors::{HostError, Result};

fn to_pixels(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// An event listener that detaches itself when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach {} listener: {:?}", self.event, e);
        }
    }
}

/// The live browser window and its document.
#[derive(Clone)]
pub struct BrowserDocument {
    window: Window,
    document: Document,
}

impl BrowserDocument {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl DocumentHost for BrowserDocument {
    type Listener = DomListener;

    fn viewport_width(&self) -> u32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .map(to_pixels)
            .unwrap_or(0)
    }

    /// Clamped to whole non-negative pixels.
    fn scroll_offset(&self) -> u32 {
        self.window.scroll_y().map(to_pixels).unwrap_or(0)
    }

    fn lock_scroll(&self) -> Result<String> {
        let body = self.document.body().ok_or(HostError::NoBody)?;
        let style = body.style();
        let previous = style.get_property_value("overflow")?;
        style.set_property("overflow", "hidden")?;
        Ok(previous)
    }

    fn restore_scroll(&self, previous: &str) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", previous)
        };
        if let Err(e) = result {
            log::warn!("Failed to restore page scroll: {}", HostError::from(e));
        }
    }

    fn listen_keydown(&self, handler: Box<dyn Fn(&str)>) -> Result<DomListener> {
        DomListener::new(&self.document, "keydown", false, move |ev: Event| {
            if let Some(key_event) = ev.dyn_ref::<KeyboardEvent>() {
                handler(&key_event.key());
            }
        })
    }

    fn listen_window(&self, event: WindowEvent, handler: Box<dyn Fn()>) -> Result<DomListener> {
        DomListener::new(&self.window, event.name(), true, move |_| handler())
    }

    fn unlisten(&self, listener: DomListener) {
        drop(listener);
    }
}
