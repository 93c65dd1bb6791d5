use leptos::prelude::*;

use crate::frontend::components::{Badge, BadgeTone, ProgressBar, StatCard};
use crate::models::{Donation, Stat};

fn donor_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Total Donated", value: "$2,450", change: "+$150 this month" },
        Stat { label: "Campaigns Supported", value: "12", change: "+2 this month" },
        Stat { label: "Lives Impacted", value: "340", change: "+28 this month" },
        Stat { label: "Donor Rank", value: "#47", change: "up 5 places" },
    ]
}

fn recent_donations() -> Vec<Donation> {
    vec![
        Donation {
            campaign: "Clean Water for Rural Communities",
            amount: 150,
            date: "Jan 15, 2024",
            status: "completed",
        },
        Donation {
            campaign: "Education for Every Child",
            amount: 75,
            date: "Jan 8, 2024",
            status: "completed",
        },
        Donation {
            campaign: "Emergency Food Relief",
            amount: 200,
            date: "Dec 28, 2023",
            status: "completed",
        },
        Donation {
            campaign: "Animal Shelter Support",
            amount: 50,
            date: "Dec 15, 2023",
            status: "completed",
        },
    ]
}

// (title, raised, goal) of campaigns this donor supports
const SUPPORTED_CAMPAIGNS: [(&str, u64, u64); 3] = [
    ("Clean Water for Rural Communities", 75420, 100000),
    ("Education for Every Child", 42350, 75000),
    ("Emergency Food Relief", 28900, 50000),
];

// (title, description, earned)
const ACHIEVEMENTS: [(&str, &str, bool); 4] = [
    ("First Donation", "Made your first donation", true),
    ("Consistent Giver", "Donated for 3 consecutive months", true),
    ("Community Builder", "Supported 10 different campaigns", true),
    ("Major Donor", "Single donation over $500", false),
];

#[component]
pub fn DonorDashboard() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Donor Dashboard"</h1>
            <p class="text-gray-600 mt-2">"Track your giving and the impact you're making."</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 mt-8">
                {donor_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat/> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mt-10">
                <div class="lg:col-span-2 space-y-8">
                    // Recent donations
                    <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                        <div class="px-6 py-4 border-b border-gray-200 flex items-center justify-between">
                            <h2 class="font-semibold text-gray-900">"Recent Donations"</h2>
                            <a href="/campaigns" class="text-sm text-indigo-600 hover:text-indigo-700">
                                "Donate again →"
                            </a>
                        </div>
                        <div class="divide-y divide-gray-100">
                            {recent_donations()
                                .into_iter()
                                .map(|donation| {
                                    view! {
                                        <div class="px-6 py-4 flex items-center justify-between">
                                            <div>
                                                <p class="font-medium text-gray-900">{donation.campaign}</p>
                                                <p class="text-sm text-gray-500">{donation.date}</p>
                                            </div>
                                            <div class="flex items-center gap-3">
                                                <span class="font-semibold text-gray-900">
                                                    "$" {donation.amount.to_string()}
                                                </span>
                                                <Badge
                                                    text=donation.status
                                                    tone=BadgeTone::for_status(donation.status)
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Supported campaigns
                    <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                        <div class="px-6 py-4 border-b border-gray-200">
                            <h2 class="font-semibold text-gray-900">"Campaigns You Support"</h2>
                        </div>
                        <div class="divide-y divide-gray-100">
                            {SUPPORTED_CAMPAIGNS
                                .iter()
                                .map(|&(title, raised, goal)| {
                                    let progress = ((raised as f64 / goal as f64) * 100.0) as u32;
                                    view! {
                                        <div class="px-6 py-4">
                                            <div class="flex justify-between text-sm mb-2">
                                                <span class="font-medium text-gray-900">{title}</span>
                                                <span class="text-gray-500">
                                                    "$" {raised.to_string()} " / $" {goal.to_string()}
                                                </span>
                                            </div>
                                            <ProgressBar value=progress/>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                // Achievements
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm h-fit">
                    <div class="px-6 py-4 border-b border-gray-200">
                        <h2 class="font-semibold text-gray-900">"Achievements"</h2>
                    </div>
                    <div class="p-6 space-y-4">
                        {ACHIEVEMENTS
                            .iter()
                            .map(|&(title, description, earned)| {
                                let classes = if earned {
                                    "flex items-start gap-3"
                                } else {
                                    "flex items-start gap-3 opacity-40"
                                };
                                view! {
                                    <div class=classes>
                                        <span class="text-xl">{if earned { "🏆" } else { "🔒" }}</span>
                                        <div>
                                            <p class="font-medium text-gray-900 text-sm">{title}</p>
                                            <p class="text-xs text-gray-500">{description}</p>
                                        </div>
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
