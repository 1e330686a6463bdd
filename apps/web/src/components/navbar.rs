use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use send_wrapper::SendWrapper;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::errors::Result;
use crate::host::{BrowserDocument, DocumentHost, DrawerSession, Listening, WindowEvent};
use crate::models::{
    desktop_entries, drawer_entries, drawer_link_class, entry_class, CloseReason, NavEntry,
    NavbarConfig, NavbarEvent, NavbarState, NavbarVariant, Presentation,
};

/// Page-top navigation bar.
///
/// Above the breakpoint it shows the inline menu and reacts to scrolling;
/// below it, a toggle opens a slide-in drawer. Configuration comes from the
/// `config` prop, then from a `NavbarConfig` in context, then defaults.
#[component]
pub fn Navbar(
    /// Overrides the variant of whichever config is in effect
    #[prop(optional)]
    variant: Option<NavbarVariant>,
    #[prop(optional)] config: Option<NavbarConfig>,
    /// Logo shown in the bar and in the drawer header
    #[prop(optional, into)]
    logo: Option<ViewFn>,
    /// Inline menu entries (defaults to the site menu)
    #[prop(optional)]
    entries: Option<Vec<NavEntry>>,
    /// Drawer entries (defaults to the site's short menu)
    #[prop(optional)]
    drawer_links: Option<Vec<NavEntry>>,
) -> impl IntoView {
    let mut config = config
        .or_else(use_context::<NavbarConfig>)
        .unwrap_or_default();
    if let Some(variant) = variant {
        config.variant = variant;
    }

    let state = RwSignal::new(NavbarState::new(config));
    let presentation = Memo::new(move |_| state.with(Presentation::new));
    let drawer_open = Memo::new(move |_| state.with(|s| s.drawer().is_open()));
    let dispatch = move |event: NavbarEvent| state.maybe_update(|s| s.apply(event));

    use_navbar_bindings(state, BrowserDocument::current);

    let close_on_link = Callback::new(move |_: ()| {
        dispatch(NavbarEvent::CloseDrawer(CloseReason::LinkActivated));
    });

    let entries = entries.unwrap_or_else(desktop_entries);
    let drawer_links = drawer_links.unwrap_or_else(drawer_entries);
    let last = entries.len().saturating_sub(1);
    let drawer_logo = logo.clone();

    view! {
        <nav class=move || presentation.get().nav_class() aria-label="Main navigation">
            <div class="flex items-center justify-between pt-6 pb-6 min-[991px]:pb-14">
                <LogoSlot logo=logo />
                <button
                    type="button"
                    class="text-brand-blue block min-[991px]:hidden"
                    aria-label="Toggle menu"
                    aria-expanded=move || drawer_open.get().to_string()
                    on:click=move |_| dispatch(NavbarEvent::ToggleDrawer)
                >
                    <MenuIcon class="w-[30px] h-[30px]" />
                </button>
            </div>

            // Inline menu
            <div class="bg-brand-blue hidden min-[991px]:flex border-b border-white absolute left-14 right-14 -bottom-5 rounded-md items-center justify-between py-2 transition-all duration-300 ease-in-out">
                <ul class="flex uppercase text-white text-[10px] font-medium px-1">
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| view! { <DesktopEntry entry=entry last={i == last} /> })
                        .collect_view()}
                </ul>
            </div>

            <Show when=move || presentation.get().overlay_shown()>
                <div
                    class="fixed inset-0 bg-black/50 z-[70] min-[991px]:hidden"
                    aria-hidden="true"
                    on:click=move |_| dispatch(NavbarEvent::CloseDrawer(CloseReason::Overlay))
                ></div>
            </Show>

            // Drawer stays mounted so it can slide
            <aside
                class=move || presentation.get().drawer_class()
                aria-hidden=move || (!drawer_open.get()).to_string()
            >
                <div class="flex items-center justify-between p-6 border-b border-gray-200">
                    <LogoSlot logo=drawer_logo />
                    <button
                        type="button"
                        class="text-gray-600"
                        aria-label="Close menu"
                        on:click=move |_| dispatch(NavbarEvent::CloseDrawer(CloseReason::CloseButton))
                    >
                        <CloseIcon class="w-6 h-6" />
                    </button>
                </div>
                <div class="py-6 overflow-y-auto h-full">
                    <ul class="space-y-2">
                        {drawer_links
                            .into_iter()
                            .map(|entry| view! { <DrawerEntry entry=entry on_activate=close_on_link /> })
                            .collect_view()}
                    </ul>
                </div>
            </aside>
        </nav>
    }
}

/// Wires a navbar's state to the page it lives on.
///
/// Window listeners live from mount to unmount. While `NavbarState::locks_page`
/// holds, a [`DrawerSession`] keeps the page scroll-locked and listens for the
/// cancel key; it is dropped when that stops holding or the owner is disposed.
/// `connect` is only called from effects, which never run during server
/// rendering, so the page is only touched in the browser.
pub fn use_navbar_bindings<H, F>(state: RwSignal<NavbarState>, connect: F)
where
    H: DocumentHost,
    F: Fn() -> Result<H> + Clone + 'static,
{
    let dispatch = move |event: NavbarEvent| state.maybe_update(|s| s.apply(event));
    let resize = move |width: u32| {
        state.maybe_update(|s| {
            let before = *s;
            if let Some(change) = s.on_resize(width) {
                log::debug!("Navbar layout {:?} at {}px", change, width);
            }
            before != *s
        })
    };
    let locks_page = Memo::new(move |_| state.with(NavbarState::locks_page));

    let connect_window = connect.clone();
    Effect::new(move |_| {
        let host = match connect_window() {
            Ok(host) => host,
            Err(e) => {
                log::debug!("Navbar mounted without a display surface: {}", e);
                return;
            }
        };

        resize(host.viewport_width());

        let mut listeners = Vec::with_capacity(2);
        let resize_host = host.clone();
        match Listening::window(&host, WindowEvent::Resize, move || {
            resize(resize_host.viewport_width());
        }) {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("Navbar resize tracking unavailable: {}", e),
        }

        if state.with_untracked(|s| s.config().variant.tracks_scroll()) {
            let scroll_host = host.clone();
            match Listening::window(&host, WindowEvent::Scroll, move || {
                dispatch(NavbarEvent::Scrolled(scroll_host.scroll_offset()));
            }) {
                Ok(listener) => listeners.push(listener),
                Err(e) => log::warn!("Navbar scroll tracking unavailable: {}", e),
            }
        }

        let listeners = SendWrapper::new(listeners);
        on_cleanup(move || drop(listeners));
    });

    // One session per run of this effect.
    Effect::new(move |_| {
        if !locks_page.get() {
            return;
        }

        let session = connect().and_then(|host| {
            DrawerSession::acquire(&host, move || {
                dispatch(NavbarEvent::CloseDrawer(CloseReason::CancelKey));
            })
        });
        match session {
            Ok(session) => {
                let session = SendWrapper::new(session);
                on_cleanup(move || drop(session));
            }
            Err(e) => log::warn!("Drawer opened without page scroll lock: {}", e),
        }
    });
}

#[component]
fn LogoSlot(logo: Option<ViewFn>) -> impl IntoView {
    match logo {
        Some(logo) => logo.run(),
        None => view! {
            <A href="/" attr:class="font-display text-xl font-semibold text-brand-blue tracking-tight">
                "ICEP"
            </A>
        }
        .into_any(),
    }
}

#[component]
fn DesktopEntry(entry: NavEntry, last: bool) -> impl IntoView {
    let pathname = use_location().pathname;
    let href = entry.href.clone();
    let label = entry.label.clone();
    let external = entry.is_external();
    let class = move || pathname.with(|path| entry_class(entry.is_active(path), last));

    view! {
        <li class=class>
            <EntryLink href=href label=label external=external class=Signal::stored(String::new()) />
        </li>
    }
}

#[component]
fn DrawerEntry(entry: NavEntry, on_activate: Callback<()>) -> impl IntoView {
    let pathname = use_location().pathname;
    let href = entry.href.clone();
    let label = entry.label.clone();
    let external = entry.is_external();
    let class = Signal::derive(move || {
        pathname.with(|path| drawer_link_class(entry.is_active(path), external).to_string())
    });

    view! {
        // Closing rides along with navigation; the click still reaches the link.
        <li on:click=move |_| on_activate.run(())>
            <EntryLink href=href label=label external=external class=class />
        </li>
    }
}

#[component]
fn EntryLink(href: String, label: String, external: bool, class: Signal<String>) -> impl IntoView {
    if external {
        view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=move || class.get()>
                {label}
            </a>
        }
        .into_any()
    } else {
        view! {
            <A href=href attr:class=move || class.get()>
                {label}
            </A>
        }
        .into_any()
    }
}
