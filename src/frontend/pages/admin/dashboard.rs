use leptos::prelude::*;

use crate::frontend::components::{Badge, BadgeTone, StatCard};
use crate::models::{FlaggedReport, Stat};

fn platform_stats() -> Vec<Stat> {
    vec![
        Stat { label: "Total Campaigns", value: "1,247", change: "+23 this week" },
        Stat { label: "Active Users", value: "15,892", change: "+312 this week" },
        Stat { label: "Platform Revenue", value: "$47,250", change: "+8.5% this month" },
        Stat { label: "Success Rate", value: "87.3%", change: "+2.1% this month" },
    ]
}

// (title, leader, goal, submitted)
const PENDING_CAMPAIGNS: [(&str, &str, u64, &str); 3] = [
    ("Medical Treatment for Children", "Dr. Amina Yusuf", 85000, "2 hours ago"),
    ("Disaster Relief Fund", "Red Crescent Local", 150000, "6 hours ago"),
    ("School Building Project", "Hope Foundation", 200000, "1 day ago"),
];

fn flagged_reports() -> Vec<FlaggedReport> {
    vec![
        FlaggedReport {
            title: "Suspicious donation patterns",
            target: "Campaign #1042",
            severity: "high",
            reported: "3 hours ago",
        },
        FlaggedReport {
            title: "Inappropriate content in campaign",
            target: "Campaign #987",
            severity: "medium",
            reported: "8 hours ago",
        },
        FlaggedReport {
            title: "Potential duplicate campaign",
            target: "Campaign #1105",
            severity: "low",
            reported: "1 day ago",
        },
    ]
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Admin Dashboard"</h1>
            <p class="text-gray-600 mt-2">"Platform health at a glance."</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-5 mt-8">
                {platform_stats()
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat/> })
                    .collect_view()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 mt-10">
                // Pending approvals
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200 flex items-center justify-between">
                        <h2 class="font-semibold text-gray-900">"Pending Campaign Approvals"</h2>
                        <a href="/admin/campaigns" class="text-sm text-indigo-600 hover:text-indigo-700">
                            "View all →"
                        </a>
                    </div>
                    <div class="divide-y divide-gray-100">
                        {PENDING_CAMPAIGNS
                            .iter()
                            .map(|&(title, leader, goal, submitted)| {
                                view! {
                                    <div class="px-6 py-4">
                                        <div class="flex items-center justify-between">
                                            <p class="font-medium text-gray-900">{title}</p>
                                            <Badge text="pending" tone=BadgeTone::Warning/>
                                        </div>
                                        <p class="text-sm text-gray-500 mt-1">
                                            {leader} " · $" {goal.to_string()} " goal · submitted " {submitted}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Flagged reports
                <div class="bg-white border border-gray-200 rounded-xl shadow-sm">
                    <div class="px-6 py-4 border-b border-gray-200 flex items-center justify-between">
                        <h2 class="font-semibold text-gray-900">"Flagged Reports"</h2>
                        <a href="/admin/reports" class="text-sm text-indigo-600 hover:text-indigo-700">
                            "View all →"
                        </a>
                    </div>
                    <div class="divide-y divide-gray-100">
                        {flagged_reports()
                            .into_iter()
                            .map(|report| {
                                view! {
                                    <div class="px-6 py-4">
                                        <div class="flex items-center justify-between">
                                            <p class="font-medium text-gray-900">{report.title}</p>
                                            <Badge
                                                text=report.severity
                                                tone=BadgeTone::for_status(report.severity)
                                            />
                                        </div>
                                        <p class="text-sm text-gray-500 mt-1">
                                            {report.target} " · reported " {report.reported}
                                        </p>
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
