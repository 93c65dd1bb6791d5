use leptos::prelude::*;

/// Placeholder route; the impact report hasn't shipped yet.
#[component]
pub fn ImpactPage() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">"Impact Report"</h1>
                <p class="text-xl text-gray-600 mb-8">"Coming Soon"</p>
                <p class="text-gray-500">"This feature is currently under development."</p>
            </div>
        </div>
    }
}
