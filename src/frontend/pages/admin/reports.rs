use leptos::prelude::*;

use crate::frontend::components::{ProgressBar, StatCard};
use crate::models::Stat;

fn report_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Donations This Month", value: "$312,480", change: "+11% vs. last month" },
        Stat { label: "New Campaigns", value: "96", change: "+23 this week" },
        Stat { label: "New Donors", value: "1,108", change: "+312 this week" },
        Stat { label: "Refund Requests", value: "14", change: "-3 vs. last month" },
    ]
}

// (category, share%)
const DONATIONS_BY_CATEGORY: [(&str, u32); 6] = [
    ("Health & Medical", 32),
    ("Emergency Relief", 24),
    ("Education", 18),
    ("Environment", 12),
    ("Animals & Wildlife", 8),
    ("Other", 6),
];

// (metric, value%)
const PLATFORM_HEALTH: [(&str, u32); 3] = [
    ("Campaign approval rate", 94),
    ("Payout success rate", 96),
    ("Uptime (90 days)", 99),
];

#[component]
pub fn PlatformReports() -> impl IntoView {
    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Platform Reports"</h1>
            <p class="text-gray-600 mt-2">"Monthly platform performance summary."</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 mt-8">
                {report_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat/> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mt-10">
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Donations by Category"</h2>
                    </div>
                    <div class="p-6 space-y-4">
                        {DONATIONS_BY_CATEGORY
                            .iter()
                            .map(|&(category, share)| {
                                view! {
                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span class="text-gray-700">{category}</span>
                                            <span class="text-gray-500">{share.to_string()} "%"</span>
                                        </div>
                                        <ProgressBar value=share/>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white border border-gray-200 rounded-xl shadow-sm h-fit">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Platform Health"</h2>
                    </div>
                    <div class="p-6 space-y-4">
                        {PLATFORM_HEALTH
                            .iter()
                            .map(|&(metric, value)| {
                                view! {
                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span class="text-gray-700">{metric}</span>
                                            <span class="text-gray-500">{value.to_string()} "%"</span>
                                        </div>
                                        <ProgressBar value=value/>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
