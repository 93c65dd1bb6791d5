use leptos::prelude::*;

use crate::frontend::components::{ProgressBar, StatCard};
use crate::models::Stat;

fn leader_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Total Raised", value: "$147,670", change: "+$8,240 this week" },
        Stat { label: "Active Campaigns", value: "3", change: "1 nearing goal" },
        Stat { label: "Total Donors", value: "2,637", change: "+89 this week" },
        Stat { label: "Avg. Donation", value: "$56", change: "+$4 this month" },
    ]
}

// (title, raised, goal, donors, days_left)
const MY_CAMPAIGNS: [(&str, u64, u64, u32, u32); 3] = [
    ("Clean Water for Rural Communities", 75420, 100000, 1247, 15),
    ("Education for Every Child", 42350, 75000, 856, 22),
    ("Emergency Food Relief", 28900, 50000, 534, 8),
];

// (donor, campaign, amount, when)
const RECENT_ACTIVITY: [(&str, &str, u64, &str); 4] = [
    ("Michael R.", "Clean Water for Rural Communities", 250, "2 hours ago"),
    ("Anonymous", "Emergency Food Relief", 100, "5 hours ago"),
    ("Priya S.", "Education for Every Child", 50, "1 day ago"),
    ("David K.", "Clean Water for Rural Communities", 500, "2 days ago"),
];

#[component]
pub fn LeaderDashboard() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Leader Dashboard"</h1>
                    <p class="text-gray-600 mt-2">"An overview of your campaigns and supporters."</p>
                </div>
                <a
                    href="/leader/create"
                    class="bg-gradient-to-r from-indigo-600 to-blue-600 text-white font-semibold px-5 py-2.5 rounded-lg hover:from-indigo-700 hover:to-blue-700 transition-all"
                >
                    "+ New Campaign"
                </a>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 mt-8">
                {leader_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat/> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mt-10">
                <div class="lg:col-span-2 bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200 flex items-center justify-between">
                        <h2 class="font-semibold text-gray-900">"Your Campaigns"</h2>
                        <a href="/leader/campaigns" class="text-sm text-indigo-600 hover:text-indigo-700">
                            "Manage →"
                        </a>
                    </div>
                    <div class="divide-y divide-gray-100">
                        {MY_CAMPAIGNS
                            .iter()
                            .map(|&(title, raised, goal, donors, days_left)| {
                                let progress = ((raised as f64 / goal as f64) * 100.0) as u32;
                                view! {
                                    <div class="px-6 py-5">
                                        <div class="flex justify-between mb-2">
                                            <p class="font-medium text-gray-900">{title}</p>
                                            <p class="text-sm text-gray-500">
                                                {donors.to_string()} " donors · " {days_left.to_string()} " days left"
                                            </p>
                                        </div>
                                        <div class="flex justify-between text-sm text-gray-600 mb-2">
                                            <span>"$" {raised.to_string()} " raised"</span>
                                            <span>"$" {goal.to_string()} " goal"</span>
                                        </div>
                                        <ProgressBar value=progress/>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="bg-white border border-gray-200 rounded-xl shadow-sm h-fit">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Recent Donations"</h2>
                    </div>
                    <div class="divide-y divide-gray-100">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|&(donor, campaign, amount, when)| {
                                view! {
                                    <div class="px-6 py-4">
                                        <div class="flex justify-between">
                                            <p class="font-medium text-gray-900 text-sm">{donor}</p>
                                            <p class="font-semibold text-gray-900 text-sm">
                                                "$" {amount.to_string()}
                                            </p>
                                        </div>
                                        <p class="text-xs text-gray-500 mt-0.5">{campaign}</p>
                                        <p class="text-xs text-gray-400 mt-0.5">{when}</p>
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
