use leptos::prelude::*;

#[component]
pub fn MenuIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h8m-8 6h16" />
        </svg>
    }
}

#[component]
pub fn CloseIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
        </svg>
    }
}
