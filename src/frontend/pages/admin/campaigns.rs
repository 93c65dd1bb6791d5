use leptos::prelude::*;

use crate::frontend::components::{Badge, BadgeTone};

// (title, leader, category, status, raised, goal)
const MANAGED_CAMPAIGNS: [(&str, &str, &str, &str, u64, u64); 6] = [
    ("Clean Water for Rural Communities", "Sarah Leader", "Health & Medical", "active", 75420, 100000),
    ("Education for Every Child", "Hope Foundation", "Education", "active", 42350, 75000),
    ("Medical Treatment for Children", "Dr. Amina Yusuf", "Health & Medical", "pending", 0, 85000),
    ("Disaster Relief Fund", "Red Crescent Local", "Emergency Relief", "pending", 0, 150000),
    ("Winter Clothing Drive", "Sarah Leader", "Community Development", "completed", 18000, 18000),
    ("Crypto Quick Riches", "Unknown", "Technology", "rejected", 0, 500000),
];

/// Campaign management table with a status filter. Approve/reject actions
/// only log; moderation state is fixture data.
#[component]
pub fn CampaignManagement() -> impl IntoView {
    let (filter, set_filter) = signal("all".to_string());

    let visible = move || {
        let f = filter.get();
        MANAGED_CAMPAIGNS
            .iter()
            .filter(|(_, _, _, status, ..)| f == "all" || *status == f)
            .copied()
            .collect::<Vec<_>>()
    };

    let tab_class = move |tab: &str| {
        if filter.get() == tab {
            "px-4 py-2 text-sm font-medium rounded-lg bg-indigo-600 text-white"
        } else {
            "px-4 py-2 text-sm font-medium rounded-lg text-gray-600 hover:bg-gray-100"
        }
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Campaign Management"</h1>
            <p class="text-gray-600 mt-2">"Review, approve, and moderate campaigns."</p>

            <div class="flex gap-2 mt-6">
                {["all", "active", "pending", "completed", "rejected"]
                    .into_iter()
                    .map(|tab| {
                        let label = match tab {
                            "all" => "All",
                            "active" => "Active",
                            "pending" => "Pending",
                            "completed" => "Completed",
                            _ => "Rejected",
                        };
                        view! {
                            <button
                                type="button"
                                on:click=move |_| set_filter.set(tab.to_string())
                                class=move || tab_class(tab)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="bg-white border border-gray-200 rounded-xl shadow-sm mt-6 overflow-x-auto">
                <table class="w-full text-left text-sm">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Campaign"</th>
                            <th class="px-6 py-3">"Leader"</th>
                            <th class="px-6 py-3">"Category"</th>
                            <th class="px-6 py-3">"Status"</th>
                            <th class="px-6 py-3 text-right">"Raised / Goal"</th>
                            <th class="px-6 py-3 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        <For
                            each=visible
                            key=|(title, ..)| *title
                            children=|(title, leader, category, status, raised, goal)| {
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 font-medium text-gray-900">{title}</td>
                                        <td class="px-6 py-4 text-gray-600">{leader}</td>
                                        <td class="px-6 py-4 text-gray-600">{category}</td>
                                        <td class="px-6 py-4">
                                            <Badge text=status tone=BadgeTone::for_status(status)/>
                                        </td>
                                        <td class="px-6 py-4 text-right text-gray-600">
                                            "$" {raised.to_string()} " / $" {goal.to_string()}
                                        </td>
                                        <td class="px-6 py-4 text-right">
                                            <Show when=move || status == "pending">
                                                <button
                                                    type="button"
                                                    on:click=move |_| {
                                                        leptos::logging::log!("Approved campaign: {title}")
                                                    }
                                                    class="text-green-600 hover:text-green-700 font-medium mr-3"
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    type="button"
                                                    on:click=move |_| {
                                                        leptos::logging::log!("Rejected campaign: {title}")
                                                    }
                                                    class="text-red-600 hover:text-red-700 font-medium"
                                                >
                                                    "Reject"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
