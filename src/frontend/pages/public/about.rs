use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-gray-900">"About CharityConnect"</h1>
            <p class="text-xl text-gray-600 mt-4">
                "We believe generosity should be simple, transparent, and effective."
            </p>

            <div class="prose prose-gray mt-10 space-y-6 text-gray-700 leading-relaxed">
                <p>
                    "CharityConnect was founded on a simple idea: that the distance between wanting "
                    "to help and actually helping should be as short as possible. We connect donors "
                    "directly with campaign leaders running verified fundraising campaigns around the world."
                </p>
                <p>
                    "Campaign leaders publish their goals, timelines, and budgets up front. Donors can "
                    "follow every campaign's progress, see how funds are used, and receive updates as "
                    "milestones are reached."
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-12">
                <div class="bg-white border border-gray-200 rounded-xl p-6 text-center shadow-sm">
                    <p class="text-3xl mb-2">"🤝"</p>
                    <p class="font-semibold text-gray-900">"Direct Connection"</p>
                    <p class="text-sm text-gray-600 mt-2">
                        "Donors and campaign leaders communicate without intermediaries."
                    </p>
                </div>
                <div class="bg-white border border-gray-200 rounded-xl p-6 text-center shadow-sm">
                    <p class="text-3xl mb-2">"🔍"</p>
                    <p class="font-semibold text-gray-900">"Full Transparency"</p>
                    <p class="text-sm text-gray-600 mt-2">
                        "Every campaign shows its budget, timeline, and progress in the open."
                    </p>
                </div>
                <div class="bg-white border border-gray-200 rounded-xl p-6 text-center shadow-sm">
                    <p class="text-3xl mb-2">"🌍"</p>
                    <p class="font-semibold text-gray-900">"Global Reach"</p>
                    <p class="text-sm text-gray-600 mt-2">
                        "Campaigns across six continents, from local shelters to disaster relief."
                    </p>
                </div>
            </div>

            <div class="text-center mt-12">
                <a
                    href="/campaigns"
                    class="inline-block bg-indigo-600 text-white font-semibold px-8 py-4 rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "Explore Campaigns"
                </a>
            </div>
        </div>
    }
}
