use leptos::prelude::*;

/// Horizontal progress bar; `value` is a percentage, clamped to 100.
#[component]
pub fn ProgressBar(value: u32) -> impl IntoView {
    let width = value.min(100);

    view! {
        <div class="w-full h-2 bg-gray-200 rounded-full overflow-hidden">
            <div
                class="h-full bg-gradient-to-r from-indigo-600 to-blue-600 rounded-full transition-all"
                style=format!("width: {width}%")
            ></div>
        </div>
    }
}
