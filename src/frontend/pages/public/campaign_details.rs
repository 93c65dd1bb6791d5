use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::frontend::components::ProgressBar;
use crate::models::Campaign;

// Same fixture shapes as the list page; details pages match by literal id.
fn campaign_fixtures() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            title: "Clean Water for Rural Communities",
            description: "Help us bring clean, safe drinking water to remote villages through sustainable well construction.",
            category: "Health & Medical",
            location: "Turkana County, Kenya",
            raised: 75420,
            goal: 100000,
            donors: 1247,
            days_left: 15,
            image: "https://images.unsplash.com/photo-1541252260730-0412e8e2108e?w=1200",
        },
        Campaign {
            id: 2,
            title: "Education for Every Child",
            description: "Providing school supplies, books, and tuition support for children in underserved communities.",
            category: "Education",
            location: "Dhaka, Bangladesh",
            raised: 42350,
            goal: 75000,
            donors: 856,
            days_left: 22,
            image: "https://images.unsplash.com/photo-1497486751825-1233686d5d80?w=1200",
        },
        Campaign {
            id: 3,
            title: "Emergency Food Relief",
            description: "Delivering emergency food packages to families affected by the recent flooding.",
            category: "Emergency Relief",
            location: "Sindh, Pakistan",
            raised: 28900,
            goal: 50000,
            donors: 534,
            days_left: 8,
            image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=1200",
        },
    ]
}

const RECENT_DONORS: [(&str, u64, &str); 4] = [
    ("Michael R.", 250, "2 hours ago"),
    ("Anonymous", 100, "5 hours ago"),
    ("Priya S.", 50, "1 day ago"),
    ("David K.", 500, "2 days ago"),
];

#[component]
pub fn CampaignDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let campaign = move || {
        let id = params
            .with(|p| p.get("id"))
            .and_then(|s| s.parse::<u32>().ok());
        id.and_then(|id| campaign_fixtures().into_iter().find(|c| c.id == id))
    };

    view! {
        <Show
            when=move || campaign().is_some()
            fallback=|| {
                view! {
                    <div class="max-w-3xl mx-auto px-4 py-24 text-center">
                        <h1 class="text-2xl font-bold text-gray-900">"Campaign not found"</h1>
                        <p class="text-gray-600 mt-2">"This campaign may have ended or been removed."</p>
                        <a href="/campaigns" class="inline-block mt-6 text-indigo-600 hover:text-indigo-700 font-medium">
                            "← Back to campaigns"
                        </a>
                    </div>
                }
            }
        >
            {move || {
                campaign()
                    .map(|c| {
                        let progress = c.progress();
                        let donate_href = format!("/donate/{}", c.id);
                        view! {
                            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
                                <a href="/campaigns" class="text-sm text-indigo-600 hover:text-indigo-700">
                                    "← Back to campaigns"
                                </a>
                                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 mt-4">
                                    <div class="lg:col-span-2">
                                        <img src=c.image alt=c.title class="w-full h-80 object-cover rounded-xl"/>
                                        <div class="flex items-center gap-3 mt-6">
                                            <span class="text-xs font-medium text-indigo-600 bg-indigo-50 px-2 py-1 rounded-full">
                                                {c.category}
                                            </span>
                                            <span class="text-sm text-gray-500">{c.location}</span>
                                        </div>
                                        <h1 class="text-3xl font-bold text-gray-900 mt-3">{c.title}</h1>
                                        <p class="text-gray-700 mt-4 leading-relaxed">{c.description}</p>
                                        <p class="text-gray-700 mt-4 leading-relaxed">
                                            "Every contribution, large or small, moves this campaign closer to its goal. "
                                            "Funds are released to the campaign leader as milestones are reached, and "
                                            "progress updates are posted for all donors to follow."
                                        </p>
                                    </div>
                                    <div>
                                        <div class="bg-white border border-gray-200 rounded-xl p-6 shadow-sm sticky top-24">
                                            <p class="text-3xl font-bold text-gray-900">
                                                "$" {c.raised.to_string()}
                                            </p>
                                            <p class="text-sm text-gray-500 mb-3">
                                                "raised of $" {c.goal.to_string()} " goal"
                                            </p>
                                            <ProgressBar value=progress/>
                                            <div class="flex justify-between text-sm text-gray-600 mt-3">
                                                <span>{c.donors.to_string()} " donors"</span>
                                                <span>{c.days_left.to_string()} " days left"</span>
                                            </div>
                                            <a
                                                href=donate_href
                                                class="block text-center bg-gradient-to-r from-indigo-600 to-blue-600 text-white font-semibold px-6 py-3 rounded-lg hover:from-indigo-700 hover:to-blue-700 transition-all mt-5"
                                            >
                                                "Donate Now"
                                            </a>
                                            <div class="mt-6">
                                                <p class="text-sm font-semibold text-gray-900 mb-3">"Recent donors"</p>
                                                {RECENT_DONORS
                                                    .iter()
                                                    .map(|&(name, amount, when)| {
                                                        view! {
                                                            <div class="flex justify-between text-sm py-1.5">
                                                                <span class="text-gray-700">{name}</span>
                                                                <span class="text-gray-500">
                                                                    "$" {amount.to_string()} " · " {when}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
