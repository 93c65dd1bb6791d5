use leptos::prelude::*;

#[component]
pub fn PoliciesPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-gray-900">"Policies"</h1>
            <p class="text-xl text-gray-600 mt-4">"How we keep the platform safe and fair"</p>

            <div class="mt-10 space-y-8 text-gray-700 leading-relaxed">
                <section>
                    <h2 class="text-xl font-semibold text-gray-900 mb-2">"Campaign Standards"</h2>
                    <p>
                        "Campaigns must describe a genuine charitable purpose with a verifiable "
                        "beneficiary. Campaigns that misrepresent their purpose, duplicate existing "
                        "campaigns, or raise funds for prohibited activities are removed."
                    </p>
                </section>
                <section>
                    <h2 class="text-xl font-semibold text-gray-900 mb-2">"Donation Policy"</h2>
                    <p>
                        "Donations are voluntary contributions, not purchases. Refunds are available "
                        "within 14 days for donations to active campaigns. Processing fees are "
                        "non-refundable once a charge settles."
                    </p>
                </section>
                <section>
                    <h2 class="text-xl font-semibold text-gray-900 mb-2">"Privacy"</h2>
                    <p>
                        "We collect only the information needed to operate the platform. Donor names "
                        "are shown on campaign pages unless the donor chooses to remain anonymous. "
                        "We never sell personal data."
                    </p>
                </section>
                <section>
                    <h2 class="text-xl font-semibold text-gray-900 mb-2">"Reporting Abuse"</h2>
                    <p>
                        "Anyone can report a campaign for review. Reports are triaged by severity and "
                        "investigated by the admin team; campaigns under investigation may be "
                        "temporarily suspended."
                    </p>
                </section>
            </div>
        </div>
    }
}
