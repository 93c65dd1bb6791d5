use leptos::prelude::*;

const FAQS: [(&str, &str); 5] = [
    (
        "How do I know a campaign is legitimate?",
        "Every campaign goes through a review before it appears in the public listings. Campaign leaders publish their budget, timeline, and beneficiary details up front, and the admin team investigates any reported campaign.",
    ),
    (
        "Where does my donation go?",
        "Your donation goes to the campaign you choose. If you opt to cover the processing fee, 100% of your chosen amount reaches the campaign; otherwise the card network fee (2.9% + $0.30) is deducted.",
    ),
    (
        "Can I donate anonymously?",
        "Yes. Check the \"Donate anonymously\" option during checkout and your name will not appear in the campaign's donor list.",
    ),
    (
        "How do I start my own campaign?",
        "Register as a campaign leader, then use the Create Campaign wizard from your dashboard. You'll describe your cause, set a goal and duration, and publish a plan with a timeline and budget.",
    ),
    (
        "Can I get a refund?",
        "Donations to active campaigns can be refunded within 14 days. Contact support with your receipt number and we'll take it from there.",
    ),
];

/// FAQ accordion; the open item index is local component state.
#[component]
pub fn HelpPage() -> impl IntoView {
    let (open_index, set_open_index) = signal(None::<usize>);

    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <h1 class="text-4xl font-bold text-gray-900">"Help Center"</h1>
            <p class="text-xl text-gray-600 mt-4">"Frequently asked questions"</p>

            <div class="mt-10 space-y-3">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(i, &(question, answer))| {
                        view! {
                            <div class="bg-white border border-gray-200 rounded-xl shadow-sm overflow-hidden">
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        set_open_index
                                            .update(|open| {
                                                *open = if *open == Some(i) { None } else { Some(i) };
                                            });
                                    }
                                    class="w-full flex items-center justify-between px-6 py-4 text-left font-medium text-gray-900 hover:bg-gray-50"
                                >
                                    <span>{question}</span>
                                    <span class="text-gray-400">
                                        {move || if open_index.get() == Some(i) { "−" } else { "+" }}
                                    </span>
                                </button>
                                <Show when=move || open_index.get() == Some(i)>
                                    <p class="px-6 pb-5 text-gray-600 text-sm leading-relaxed">{answer}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="bg-indigo-50 border border-indigo-100 rounded-xl p-6 mt-10 text-center">
                <p class="font-semibold text-gray-900">"Still need help?"</p>
                <p class="text-sm text-gray-600 mt-1">"Our support team typically responds within one business day."</p>
                <a href="/contact" class="inline-block mt-4 text-indigo-600 hover:text-indigo-700 font-medium">
                    "Contact Support →"
                </a>
            </div>
        </div>
    }
}
