use leptos::prelude::*;

/// 404 Not Found page, the only catch-all rule in the route table.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-7xl font-bold text-indigo-600">"404"</h1>
                <p class="text-xl font-semibold text-gray-900 mt-4">"Page not found"</p>
                <p class="text-gray-600 mt-2">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/"
                    class="inline-block mt-6 bg-indigo-600 text-white px-6 py-3 rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Return Home"
                </a>
            </div>
        </div>
    }
}
