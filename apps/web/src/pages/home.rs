use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <section class="py-24 text-center">
                <h1 class="font-display text-4xl md:text-6xl font-semibold text-brand-blue mb-6">
                    "Prepare for the CSS exam with confidence"
                </h1>
                <p class="text-lg text-gray-600 max-w-xl mx-auto">
                    "Courses, past papers, notes and book summaries in one place."
                </p>
            </section>

            <section id="courses-section" class="py-24 border-t border-gray-200">
                <h2 class="font-display text-3xl text-brand-blue mb-4">"Courses"</h2>
                <p class="text-gray-600 max-w-2xl">
                    "Structured preparation for compulsory and optional subjects."
                </p>
            </section>

            <section id="success-stories-section" class="py-24 border-t border-gray-200">
                <h2 class="font-display text-3xl text-brand-blue mb-4">"Success Stories"</h2>
                <p class="text-gray-600 max-w-2xl">
                    "Hear from candidates who cleared the exam."
                </p>
            </section>
        </div>
    }
}
