use leptos::prelude::*;

use crate::frontend::components::ProgressBar;
use crate::models::{Campaign, Stat};

/// Summary tile used at the top of each dashboard.
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 p-6 shadow-sm">
            <p class="text-sm font-medium text-gray-600">{stat.label}</p>
            <p class="text-2xl font-bold text-gray-900 mt-1">{stat.value}</p>
            <p class="text-xs text-green-600 mt-1">{stat.change}</p>
        </div>
    }
}

/// Campaign tile for grid listings; links to the campaign's detail page.
#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let progress = campaign.progress();
    let details_href = format!("/campaigns/{}", campaign.id);
    let donate_href = format!("/donate/{}", campaign.id);

    view! {
        <div class="bg-white rounded-xl border border-gray-200 shadow-sm overflow-hidden hover:shadow-md transition-shadow">
            <img src=campaign.image alt=campaign.title class="w-full h-44 object-cover"/>
            <div class="p-5">
                <div class="flex items-center justify-between mb-2">
                    <span class="text-xs font-medium text-indigo-600 bg-indigo-50 px-2 py-1 rounded-full">
                        {campaign.category}
                    </span>
                    <span class="text-xs text-gray-500">{campaign.days_left} " days left"</span>
                </div>
                <a href=details_href class="block">
                    <h3 class="font-semibold text-gray-900 hover:text-indigo-600 transition-colors">
                        {campaign.title}
                    </h3>
                </a>
                <p class="text-sm text-gray-600 mt-1 line-clamp-2">{campaign.description}</p>
                <div class="mt-4">
                    <div class="flex justify-between text-sm mb-1">
                        <span class="font-medium text-gray-900">
                            "$" {campaign.raised.to_string()} " raised"
                        </span>
                        <span class="text-gray-500">"$" {campaign.goal.to_string()} " goal"</span>
                    </div>
                    <ProgressBar value=progress/>
                </div>
                <div class="flex items-center justify-between mt-4">
                    <span class="text-xs text-gray-500">{campaign.donors.to_string()} " donors"</span>
                    <a
                        href=donate_href
                        class="text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700 px-4 py-2 rounded-lg transition-colors"
                    >
                        "Donate"
                    </a>
                </div>
            </div>
        </div>
    }
}
