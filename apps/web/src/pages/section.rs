use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Content page for one site section. Nested routes show the sub-path
/// (e.g. a paper year) under the section heading.
#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    let params = use_params_map();
    let detail = move || params.read().get("detail");

    view! {
        <section class="py-16 min-h-[150vh]">
            <h1 class="font-display text-4xl text-brand-blue mb-4">{title}</h1>
            {move || detail().map(|d| view! { <h2 class="text-xl text-gray-500">{d}</h2> })}
        </section>
    }
}
