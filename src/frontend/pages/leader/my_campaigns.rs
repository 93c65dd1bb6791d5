use leptos::prelude::*;

use crate::frontend::components::{Badge, BadgeTone, ProgressBar};

// (title, status, raised, goal, donors, days_left)
const CAMPAIGNS: [(&str, &str, u64, u64, u32, u32); 4] = [
    ("Clean Water for Rural Communities", "active", 75420, 100000, 1247, 15),
    ("Education for Every Child", "active", 42350, 75000, 856, 22),
    ("Emergency Food Relief", "active", 28900, 50000, 534, 8),
    ("Winter Clothing Drive", "completed", 18000, 18000, 423, 0),
];

/// Campaign list with a status filter tab. Filtering is local state over the
/// embedded array.
#[component]
pub fn MyCampaigns() -> impl IntoView {
    let (filter, set_filter) = signal("all".to_string());

    let visible = move || {
        let f = filter.get();
        CAMPAIGNS
            .iter()
            .filter(|(_, status, ..)| f == "all" || *status == f)
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
        <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"My Campaigns"</h1>
                    <p class="text-gray-600 mt-2">"Manage and track all of your campaigns."</p>
                </div>
                <a
                    href="/leader/create"
                    class="bg-gradient-to-r from-indigo-600 to-blue-600 text-white font-semibold px-5 py-2.5 rounded-lg hover:from-indigo-700 hover:to-blue-700 transition-all"
                >
                    "+ New Campaign"
                </a>
            </div>

            <div class="flex gap-2 mt-6">
                {["all", "active", "completed"]
                    .into_iter()
                    .map(|tab| {
                        let label = match tab {
                            "all" => "All",
                            "active" => "Active",
                            _ => "Completed",
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

            <div class="mt-6 space-y-4">
                <For
                    each=visible
                    key=|(title, ..)| *title
                    children=|(title, status, raised, goal, donors, days_left)| {
                        let progress = ((raised as f64 / goal as f64) * 100.0) as u32;
                        view! {
                            <div class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm">
                                <div class="flex items-center justify-between mb-3">
                                    <div class="flex items-center gap-3">
                                        <p class="font-semibold text-gray-900">{title}</p>
                                        <Badge text=status tone=BadgeTone::for_status(status)/>
                                    </div>
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
                    }
                />
            </div>
        </div>
    }
}
