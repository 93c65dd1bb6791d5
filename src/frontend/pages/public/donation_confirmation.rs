use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn DonationConfirmationPage() -> impl IntoView {
    let params = use_params_map();
    let details_href = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_else(|| "1".to_string());
        format!("/campaigns/{id}")
    };

    view! {
        <div class="max-w-xl mx-auto px-4 sm:px-6 lg:px-8 py-20 text-center">
            <div class="w-16 h-16 bg-green-100 text-green-600 rounded-full flex items-center justify-center text-3xl mx-auto">
                "✓"
            </div>
            <h1 class="text-3xl font-bold text-gray-900 mt-6">"Thank You!"</h1>
            <p class="text-gray-600 mt-3">
                "Your donation has been received. A receipt has been sent to your email address."
            </p>
            <div class="bg-white border border-gray-200 rounded-xl p-6 mt-8 text-left shadow-sm">
                <p class="text-sm font-semibold text-gray-900 mb-3">"What happens next?"</p>
                <ul class="text-sm text-gray-600 space-y-2">
                    <li>"• The campaign leader is notified of your contribution."</li>
                    <li>"• You'll receive progress updates as milestones are reached."</li>
                    <li>"• Funds are released to the campaign as goals are verified."</li>
                </ul>
            </div>
            <div class="flex items-center justify-center gap-4 mt-8">
                <a
                    href=details_href
                    class="border border-gray-300 text-gray-700 px-6 py-3 rounded-lg hover:bg-gray-50 transition-colors"
                >
                    "Back to Campaign"
                </a>
                <a
                    href="/campaigns"
                    class="bg-indigo-600 text-white px-6 py-3 rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Explore More Campaigns"
                </a>
            </div>
        </div>
    }
}
