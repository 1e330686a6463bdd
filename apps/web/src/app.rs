use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::components::Navbar;
use crate::models::NavbarVariant;
use crate::pages::{HomePage, SectionPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <Navbar variant=NavbarVariant::StickyFlexible />
                <main class="container mx-auto px-5 min-[440px]:px-14 pt-10">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/past-papers") view=|| view! { <SectionPage title="Past Papers" /> } />
                        <Route path=path!("/past-papers/:detail") view=|| view! { <SectionPage title="Past Papers" /> } />
                        <Route path=path!("/magazines") view=|| view! { <SectionPage title="Magazines" /> } />
                        <Route path=path!("/notes") view=|| view! { <SectionPage title="Notes" /> } />
                        <Route path=path!("/book-summaries") view=|| view! { <SectionPage title="Book Summaries" /> } />
                        <Route path=path!("/contact") view=|| view! { <SectionPage title="Contact" /> } />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

const NOT_FOUND_SHORTCUTS: [(&str, &str); 3] = [
    ("/past-papers", "Browse past papers"),
    ("/notes", "Read the notes"),
    ("/contact", "Ask the institute"),
];

/// Fallback route: names the missing path and points at the study sections.
#[component]
fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <section class="max-w-xl mx-auto py-16">
            <p class="text-sm uppercase tracking-wide text-gray-400">"Nothing at"</p>
            <code class="block text-brand-blue text-lg break-all mb-6">{move || pathname.get()}</code>
            <p class="text-gray-600 mb-8">
                "This address is not part of the ICEP site. The material you were after is probably in one of these sections:"
            </p>
            <ul class="grid gap-3 min-[440px]:grid-cols-3">
                {NOT_FOUND_SHORTCUTS
                    .into_iter()
                    .map(|(href, label)| view! {
                        <li>
                            <A href=href attr:class="block rounded-md border border-brand-blue px-4 py-3 text-center text-brand-blue hover:bg-brand-yellow">
                                {label}
                            </A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 mt-20">
            <div class="container mx-auto px-4 py-8 text-center">
                <p class="text-gray-400 text-sm">"ICEP CSS Institute"</p>
            </div>
        </footer>
    }
}
