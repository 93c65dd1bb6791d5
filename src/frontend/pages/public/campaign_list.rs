use leptos::prelude::*;

use crate::frontend::components::CampaignCard;
use crate::models::Campaign;

fn all_campaigns() -> Vec<Campaign> {
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
            image: "https://images.unsplash.com/photo-1541252260730-0412e8e2108e?w=800",
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
            image: "https://images.unsplash.com/photo-1497486751825-1233686d5d80?w=800",
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
            image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800",
        },
        Campaign {
            id: 4,
            title: "Save the Rainforest",
            description: "Protecting endangered rainforest habitats and supporting indigenous conservation efforts.",
            category: "Environment",
            location: "Amazonas, Brazil",
            raised: 89250,
            goal: 120000,
            donors: 2103,
            days_left: 45,
            image: "https://images.unsplash.com/photo-1440342359743-84fcb8c21f21?w=800",
        },
        Campaign {
            id: 5,
            title: "Animal Shelter Support",
            description: "Food, medical care, and shelter improvements for rescued animals awaiting adoption.",
            category: "Animals & Wildlife",
            location: "Austin, Texas",
            raised: 15680,
            goal: 30000,
            donors: 312,
            days_left: 30,
            image: "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=800",
        },
        Campaign {
            id: 6,
            title: "Community Health Clinic",
            description: "Building a permanent health clinic to serve a community of over 10,000 people.",
            category: "Health & Medical",
            location: "Ouagadougou, Burkina Faso",
            raised: 67890,
            goal: 95000,
            donors: 978,
            days_left: 18,
            image: "https://images.unsplash.com/photo-1538108149393-fbbd81895907?w=800",
        },
    ]
}

const CATEGORIES: [&str; 6] = [
    "all",
    "Health & Medical",
    "Education",
    "Environment",
    "Emergency Relief",
    "Animals & Wildlife",
];

/// Browse page: free-text search, category filter, and sort over the
/// in-memory campaign array. All of it is local component state.
#[component]
pub fn CampaignListPage() -> impl IntoView {
    let (search_query, set_search_query) = signal(String::new());
    let (selected_category, set_selected_category) = signal("all".to_string());
    let (sort_by, set_sort_by) = signal("recent".to_string());

    let visible_campaigns = move || {
        let query = search_query.get().to_lowercase();
        let category = selected_category.get();

        let mut campaigns: Vec<Campaign> = all_campaigns()
            .into_iter()
            .filter(|c| {
                let matches_search = query.is_empty()
                    || c.title.to_lowercase().contains(&query)
                    || c.description.to_lowercase().contains(&query);
                let matches_category = category == "all" || c.category == category;
                matches_search && matches_category
            })
            .collect();

        match sort_by.get().as_str() {
            "raised" => campaigns.sort_by(|a, b| b.raised.cmp(&a.raised)),
            "goal" => campaigns.sort_by(|a, b| b.goal.cmp(&a.goal)),
            "ending" => campaigns.sort_by(|a, b| a.days_left.cmp(&b.days_left)),
            // "recent": keep fixture order, newest first
            _ => campaigns.sort_by(|a, b| b.id.cmp(&a.id)),
        }
        campaigns
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Browse Campaigns"</h1>
            <p class="text-gray-600 mt-2">"Find a cause you care about and make an impact."</p>

            // Filters
            <div class="flex flex-col md:flex-row gap-4 mt-8">
                <input
                    type="search"
                    placeholder="Search campaigns..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| set_search_query.set(event_target_value(&ev))
                    class="flex-1 px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                           placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                />
                <select
                    prop:value=move || selected_category.get()
                    on:change=move |ev| set_selected_category.set(event_target_value(&ev))
                    class="px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                           focus:outline-none focus:ring-2 focus:ring-indigo-500"
                >
                    {CATEGORIES
                        .iter()
                        .map(|&c| {
                            let label = if c == "all" { "All Categories" } else { c };
                            view! { <option value=c>{label}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || sort_by.get()
                    on:change=move |ev| set_sort_by.set(event_target_value(&ev))
                    class="px-4 py-2.5 rounded-lg bg-white border border-gray-300 text-gray-900
                           focus:outline-none focus:ring-2 focus:ring-indigo-500"
                >
                    <option value="recent">"Most Recent"</option>
                    <option value="raised">"Most Raised"</option>
                    <option value="goal">"Highest Goal"</option>
                    <option value="ending">"Ending Soon"</option>
                </select>
            </div>

            // Results
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mt-8">
                <For
                    each=visible_campaigns
                    key=|campaign| campaign.id
                    children=|campaign| view! { <CampaignCard campaign=campaign/> }
                />
            </div>

            <Show when=move || visible_campaigns().is_empty()>
                <div class="text-center py-16">
                    <p class="text-gray-500">"No campaigns match your search."</p>
                </div>
            </Show>
        </div>
    }
}
