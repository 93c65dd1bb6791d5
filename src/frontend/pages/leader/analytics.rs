use leptos::prelude::*;

use crate::frontend::components::{ProgressBar, StatCard};
use crate::models::Stat;

fn analytics_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Page Views", value: "48,392", change: "+12% this month" },
        Stat { label: "Conversion Rate", value: "4.2%", change: "+0.3% this month" },
        Stat { label: "Avg. Donation", value: "$56", change: "+$4 this month" },
        Stat { label: "Repeat Donors", value: "31%", change: "+2% this month" },
    ]
}

// (campaign, views, donations, conversion%)
const CAMPAIGN_PERFORMANCE: [(&str, u32, u32, u32); 3] = [
    ("Clean Water for Rural Communities", 21450, 1247, 6),
    ("Education for Every Child", 15230, 856, 5),
    ("Emergency Food Relief", 11712, 534, 4),
];

// (source, share%)
const TRAFFIC_SOURCES: [(&str, u32); 5] = [
    ("Direct", 38),
    ("Social Media", 27),
    ("Search", 19),
    ("Email", 11),
    ("Referral", 5),
];

#[component]
pub fn LeaderAnalytics() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Analytics"</h1>
            <p class="text-gray-600 mt-2">"How your campaigns are performing."</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 mt-8">
                {analytics_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat/> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mt-10">
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Campaign Performance"</h2>
                    </div>
                    <table class="w-full text-left text-sm">
                        <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                            <tr>
                                <th class="px-6 py-3">"Campaign"</th>
                                <th class="px-6 py-3 text-right">"Views"</th>
                                <th class="px-6 py-3 text-right">"Donations"</th>
                                <th class="px-6 py-3 text-right">"Conv."</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {CAMPAIGN_PERFORMANCE
                                .iter()
                                .map(|&(campaign, views, donations, conversion)| {
                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 font-medium text-gray-900">{campaign}</td>
                                            <td class="px-6 py-4 text-right text-gray-600">{views.to_string()}</td>
                                            <td class="px-6 py-4 text-right text-gray-600">{donations.to_string()}</td>
                                            <td class="px-6 py-4 text-right text-gray-600">{conversion.to_string()} "%"</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Traffic Sources"</h2>
                    </div>
                    <div class="p-6 space-y-4">
                        {TRAFFIC_SOURCES
                            .iter()
                            .map(|&(source, share)| {
                                view! {
                                    <div>
                                        <div class="flex justify-between text-sm mb-1">
                                            <span class="text-gray-700">{source}</span>
                                            <span class="text-gray-500">{share.to_string()} "%"</span>
                                        </div>
                                        <ProgressBar value=share/>
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
