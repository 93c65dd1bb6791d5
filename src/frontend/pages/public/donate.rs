use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::frontend::components::ProgressBar;

const PRESET_AMOUNTS: [u32; 6] = [25, 50, 100, 250, 500, 1000];

/// Donation checkout. Amount selection, fee cover, and the anonymous toggle
/// are all local state; "processing" is a pure navigation to the
/// confirmation page; no payment happens.
#[component]
pub fn DonatePage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let campaign_id =
        move || params.with(|p| p.get("id")).unwrap_or_else(|| "1".to_string());

    let (donation_amount, set_donation_amount) = signal(String::new());
    let (custom_amount, set_custom_amount) = signal(String::new());
    let (is_anonymous, set_is_anonymous) = signal(false);
    let (cover_fees, set_cover_fees) = signal(true);
    let (message, set_message) = signal(String::new());

    let selected_amount = move || -> f64 {
        if donation_amount.get() == "custom" {
            custom_amount.get().parse().unwrap_or(0.0)
        } else {
            donation_amount.get().parse().unwrap_or(0.0)
        }
    };
    // Card network fee: 2.9% + $0.30
    let processing_fee = move || selected_amount() * 0.029 + 0.30;
    let total_amount = move || {
        if cover_fees.get() {
            selected_amount() + processing_fee()
        } else {
            selected_amount()
        }
    };

    let on_donate = move |_| {
        leptos::logging::log!(
            "Donation submitted: amount={:.2} anonymous={} message={:?}",
            total_amount(),
            is_anonymous.get(),
            message.get(),
        );
        navigate(
            &format!("/donation-confirmation/{}", campaign_id()),
            Default::default(),
        );
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <a href="/campaigns" class="text-sm text-indigo-600 hover:text-indigo-700">
                "← Back to campaigns"
            </a>
            <h1 class="text-3xl font-bold text-gray-900 mt-4">"Complete Your Donation"</h1>

            // Campaign summary
            <div class="bg-white border border-gray-200 rounded-xl p-5 mt-6 shadow-sm">
                <p class="font-semibold text-gray-900">"Clean Water for Rural Communities"</p>
                <p class="text-sm text-gray-500 mt-1">"$75,420 raised of $100,000 goal"</p>
                <div class="mt-3">
                    <ProgressBar value=75/>
                </div>
            </div>

            // Amount selection
            <div class="bg-white border border-gray-200 rounded-xl p-6 mt-6 shadow-sm">
                <p class="font-semibold text-gray-900 mb-4">"Choose an amount"</p>
                <div class="grid grid-cols-3 gap-3">
                    {PRESET_AMOUNTS
                        .iter()
                        .map(|&amount| {
                            let value = amount.to_string();
                            let display = value.clone();
                            let select_value = value.clone();
                            view! {
                                <button
                                    type="button"
                                    on:click=move |_| set_donation_amount.set(select_value.clone())
                                    class=move || {
                                        if donation_amount.get() == value {
                                            "border-2 border-indigo-600 bg-indigo-50 text-indigo-700 font-semibold rounded-lg py-3"
                                        } else {
                                            "border border-gray-300 text-gray-700 rounded-lg py-3 hover:border-indigo-400"
                                        }
                                    }
                                >
                                    "$" {display}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    on:click=move |_| set_donation_amount.set("custom".to_string())
                    class=move || {
                        if donation_amount.get() == "custom" {
                            "w-full mt-3 border-2 border-indigo-600 bg-indigo-50 text-indigo-700 font-semibold rounded-lg py-3"
                        } else {
                            "w-full mt-3 border border-gray-300 text-gray-700 rounded-lg py-3 hover:border-indigo-400"
                        }
                    }
                >
                    "Custom amount"
                </button>
                <Show when=move || donation_amount.get() == "custom">
                    <input
                        type="number"
                        min="1"
                        placeholder="Enter amount"
                        prop:value=move || custom_amount.get()
                        on:input=move |ev| set_custom_amount.set(event_target_value(&ev))
                        class="w-full mt-3 px-4 py-2.5 rounded-lg border border-gray-300
                               focus:outline-none focus:ring-2 focus:ring-indigo-500"
                    />
                </Show>
            </div>

            // Options
            <div class="bg-white border border-gray-200 rounded-xl p-6 mt-6 shadow-sm space-y-4">
                <label class="flex items-center gap-3 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || cover_fees.get()
                        on:change=move |ev| set_cover_fees.set(event_target_checked(&ev))
                        class="rounded border-gray-300 text-indigo-600 focus:ring-indigo-500"
                    />
                    {move || {
                        format!("Cover the processing fee (${:.2}) so 100% reaches the campaign", processing_fee())
                    }}
                </label>
                <label class="flex items-center gap-3 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        prop:checked=move || is_anonymous.get()
                        on:change=move |ev| set_is_anonymous.set(event_target_checked(&ev))
                        class="rounded border-gray-300 text-indigo-600 focus:ring-indigo-500"
                    />
                    "Donate anonymously"
                </label>
                <textarea
                    placeholder="Leave a message of support (optional)"
                    rows=3
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    class="w-full px-4 py-2.5 rounded-lg border border-gray-300
                           focus:outline-none focus:ring-2 focus:ring-indigo-500"
                ></textarea>
            </div>

            // Total + submit
            <div class="bg-white border border-gray-200 rounded-xl p-6 mt-6 shadow-sm">
                <div class="flex justify-between text-sm text-gray-600">
                    <span>"Donation"</span>
                    <span>{move || format!("${:.2}", selected_amount())}</span>
                </div>
                <Show when=move || cover_fees.get()>
                    <div class="flex justify-between text-sm text-gray-600 mt-1">
                        <span>"Processing fee"</span>
                        <span>{move || format!("${:.2}", processing_fee())}</span>
                    </div>
                </Show>
                <div class="flex justify-between font-semibold text-gray-900 border-t border-gray-200 mt-3 pt-3">
                    <span>"Total"</span>
                    <span>{move || format!("${:.2}", total_amount())}</span>
                </div>
                <button
                    type="button"
                    disabled=move || selected_amount() <= 0.0
                    on:click=on_donate
                    class="w-full mt-5 bg-gradient-to-r from-indigo-600 to-blue-600 text-white font-semibold
                           py-3 rounded-lg hover:from-indigo-700 hover:to-blue-700 transition-all
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    "Donate Now"
                </button>
            </div>
        </div>
    }
}
