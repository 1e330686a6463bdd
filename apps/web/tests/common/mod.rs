//! In-memory stand-in for the browser page, and a harness that mounts the
//! navbar's own bindings against it under a reactive owner.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use any_spawner::Executor;
use leptos::prelude::*;

use icep_web::components::use_navbar_bindings;
use icep_web::errors::Result;
use icep_web::host::{DocumentHost, WindowEvent};
use icep_web::models::{NavbarConfig, NavbarEvent, NavbarState};

type KeyHandler = Rc<dyn Fn(&str)>;
type WindowHandler = Rc<dyn Fn()>;

#[derive(Default)]
struct Page {
    width: Cell<u32>,
    scroll: Cell<u32>,
    overflow: RefCell<String>,
    keydown: RefCell<Vec<(u32, KeyHandler)>>,
    window: RefCell<Vec<(u32, WindowEvent, WindowHandler)>>,
    next_id: Cell<u32>,
    lock_calls: Cell<u32>,
    restore_calls: Cell<u32>,
}

#[derive(Clone, Default)]
pub struct FakeDocument(Rc<Page>);

impl FakeDocument {
    pub fn with_width(width: u32) -> Self {
        let document = Self::default();
        document.0.width.set(width);
        document
    }

    pub fn scroll_locked(&self) -> bool {
        *self.0.overflow.borrow() == "hidden"
    }

    pub fn keydown_listeners(&self) -> usize {
        self.0.keydown.borrow().len()
    }

    pub fn window_listeners(&self, event: WindowEvent) -> usize {
        self.0
            .window
            .borrow()
            .iter()
            .filter(|(_, registered, _)| *registered == event)
            .count()
    }

    pub fn lock_calls(&self) -> u32 {
        self.0.lock_calls.get()
    }

    pub fn restore_calls(&self) -> u32 {
        self.0.restore_calls.get()
    }

    pub fn set_overflow(&self, value: &str) {
        *self.0.overflow.borrow_mut() = value.to_string();
    }

    pub fn overflow(&self) -> String {
        self.0.overflow.borrow().clone()
    }

    /// Deliver a keydown to every registered listener.
    pub fn press(&self, key: &str) {
        let handlers: Vec<KeyHandler> = self
            .0
            .keydown
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(key);
        }
    }

    pub fn scroll_to(&self, y: u32) {
        self.0.scroll.set(y);
        self.fire(WindowEvent::Scroll);
    }

    pub fn resize_to(&self, width: u32) {
        self.0.width.set(width);
        self.fire(WindowEvent::Resize);
    }

    fn fire(&self, event: WindowEvent) {
        let handlers: Vec<WindowHandler> = self
            .0
            .window
            .borrow()
            .iter()
            .filter(|(_, registered, _)| *registered == event)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    fn next_id(&self) -> u32 {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        id
    }
}

impl DocumentHost for FakeDocument {
    type Listener = u32;

    fn viewport_width(&self) -> u32 {
        self.0.width.get()
    }

    fn scroll_offset(&self) -> u32 {
        self.0.scroll.get()
    }

    fn lock_scroll(&self) -> Result<String> {
        self.0.lock_calls.set(self.0.lock_calls.get() + 1);
        Ok(self.0.overflow.replace("hidden".to_string()))
    }

    fn restore_scroll(&self, previous: &str) {
        self.0.restore_calls.set(self.0.restore_calls.get() + 1);
        *self.0.overflow.borrow_mut() = previous.to_string();
    }

    fn listen_keydown(&self, handler: Box<dyn Fn(&str)>) -> Result<u32> {
        let id = self.next_id();
        self.0.keydown.borrow_mut().push((id, Rc::from(handler)));
        Ok(id)
    }

    fn listen_window(&self, event: WindowEvent, handler: Box<dyn Fn()>) -> Result<u32> {
        let id = self.next_id();
        self.0.window.borrow_mut().push((id, event, Rc::from(handler)));
        Ok(id)
    }

    fn unlisten(&self, listener: u32) {
        self.0.keydown.borrow_mut().retain(|(id, _)| *id != listener);
        self.0.window.borrow_mut().retain(|(id, _, _)| *id != listener);
    }
}

/// Run a test body on a local task set with the tokio executor installed,
/// so effects get scheduled.
pub async fn run_local<F: Future>(body: F) -> F::Output {
    let _ = Executor::init_tokio();
    tokio::task::LocalSet::new().run_until(body).await
}

/// Let pending effect runs complete.
pub async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

/// Navbar bindings mounted on a `FakeDocument` under their own owner.
pub struct MountedNavbar {
    pub document: FakeDocument,
    owner: Owner,
    state: RwSignal<NavbarState>,
}

impl MountedNavbar {
    pub async fn mount(config: NavbarConfig, width: u32) -> Self {
        let document = FakeDocument::with_width(width);
        let owner = Owner::new();
        let host = document.clone();
        let state = owner.with(|| {
            let state = RwSignal::new(NavbarState::new(config));
            use_navbar_bindings(state, move || Ok(host.clone()));
            state
        });
        settle().await;

        Self {
            document,
            owner,
            state,
        }
    }

    pub fn state(&self) -> NavbarState {
        self.state.get_untracked()
    }

    /// Dispatch an event the way the component's click handlers do.
    pub async fn send(&self, event: NavbarEvent) {
        self.state.maybe_update(|s| s.apply(event));
        settle().await;
    }

    pub async fn press(&self, key: &str) {
        self.document.press(key);
        settle().await;
    }

    pub async fn scroll_to(&self, y: u32) {
        self.document.scroll_to(y);
        settle().await;
    }

    pub async fn resize_to(&self, width: u32) {
        self.document.resize_to(width);
        settle().await;
    }

    /// Dispose the owner, as unmounting the component does.
    pub async fn unmount(self) -> FakeDocument {
        self.owner.cleanup();
        settle().await;
        self.document
    }
}
