use leptos::prelude::*;

use crate::frontend::components::CampaignCard;
use crate::models::Campaign;

fn featured_campaigns() -> Vec<Campaign> {
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
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-indigo-600 via-indigo-700 to-blue-700 text-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-24 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold leading-tight">
                        "Make a Difference"<br/>
                        <span class="text-indigo-200">"One Donation at a Time"</span>
                    </h1>
                    <p class="text-xl text-indigo-100 mt-6 max-w-2xl mx-auto">
                        "CharityConnect brings donors and campaign leaders together to fund the causes that matter most."
                    </p>
                    <div class="flex items-center justify-center gap-4 mt-10">
                        <a
                            href="/campaigns"
                            class="bg-white text-indigo-700 font-semibold px-8 py-4 rounded-lg hover:bg-indigo-50 transition-colors"
                        >
                            "Browse Campaigns"
                        </a>
                        <a
                            href="/login?role=campaign-leader"
                            class="border border-indigo-300 text-white font-semibold px-8 py-4 rounded-lg hover:bg-indigo-600 transition-colors"
                        >
                            "Start a Campaign"
                        </a>
                    </div>
                </div>
            </section>

            // Platform stats
            <section class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                    <div>
                        <p class="text-3xl font-bold text-gray-900">"$2.4M"</p>
                        <p class="text-sm text-gray-600 mt-1">"Raised to date"</p>
                    </div>
                    <div>
                        <p class="text-3xl font-bold text-gray-900">"1,247"</p>
                        <p class="text-sm text-gray-600 mt-1">"Campaigns funded"</p>
                    </div>
                    <div>
                        <p class="text-3xl font-bold text-gray-900">"15,892"</p>
                        <p class="text-sm text-gray-600 mt-1">"Active donors"</p>
                    </div>
                    <div>
                        <p class="text-3xl font-bold text-gray-900">"87.3%"</p>
                        <p class="text-sm text-gray-600 mt-1">"Success rate"</p>
                    </div>
                </div>
            </section>

            // Featured campaigns
            <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="flex items-center justify-between mb-8">
                    <h2 class="text-2xl font-bold text-gray-900">"Featured Campaigns"</h2>
                    <a href="/campaigns" class="text-indigo-600 hover:text-indigo-700 font-medium text-sm">
                        "View all →"
                    </a>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {featured_campaigns()
                        .into_iter()
                        .map(|campaign| view! { <CampaignCard campaign=campaign/> })
                        .collect_view()}
                </div>
            </section>

            // CTA
            <section class="bg-gray-900 text-white">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center">
                    <h2 class="text-3xl font-bold">"Ready to change a life today?"</h2>
                    <p class="text-gray-300 mt-4">
                        "Every donation counts. Join our community of changemakers."
                    </p>
                    <a
                        href="/register"
                        class="inline-block mt-8 bg-gradient-to-r from-indigo-500 to-blue-500 text-white font-semibold px-8 py-4 rounded-lg hover:from-indigo-600 hover:to-blue-600 transition-all"
                    >
                        "Get Started"
                    </a>
                </div>
            </section>
        </div>
    }
}
