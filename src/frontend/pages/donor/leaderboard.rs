use leptos::prelude::*;

use crate::models::LeaderboardEntry;

fn leaderboard_fixtures() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry { rank: 1, name: "Margaret Chen", total_donated: 15420, campaigns_supported: 34 },
        LeaderboardEntry { rank: 2, name: "Carlos Oliveira", total_donated: 12850, campaigns_supported: 28 },
        LeaderboardEntry { rank: 3, name: "Aisha Mohammed", total_donated: 11200, campaigns_supported: 41 },
        LeaderboardEntry { rank: 4, name: "Tom Eriksen", total_donated: 9875, campaigns_supported: 19 },
        LeaderboardEntry { rank: 5, name: "Yuki Tanaka", total_donated: 8540, campaigns_supported: 25 },
        LeaderboardEntry { rank: 6, name: "Anonymous", total_donated: 7300, campaigns_supported: 12 },
        LeaderboardEntry { rank: 7, name: "Sophie Laurent", total_donated: 6120, campaigns_supported: 17 },
    ]
}

#[component]
pub fn DonorLeaderboard() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-10">
            <h1 class="text-3xl font-bold text-gray-900">"Donor Leaderboard"</h1>
            <p class="text-gray-600 mt-2">"Celebrating our most generous community members this year."</p>

            <div class="bg-white border border-gray-200 rounded-xl shadow-sm mt-8 overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-gray-50 text-xs uppercase text-gray-500">
                        <tr>
                            <th class="px-6 py-3">"Rank"</th>
                            <th class="px-6 py-3">"Donor"</th>
                            <th class="px-6 py-3 text-right">"Total Donated"</th>
                            <th class="px-6 py-3 text-right">"Campaigns"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-100">
                        {leaderboard_fixtures()
                            .into_iter()
                            .map(|entry| {
                                let medal = match entry.rank {
                                    1 => "🥇",
                                    2 => "🥈",
                                    3 => "🥉",
                                    _ => "",
                                };
                                view! {
                                    <tr class="hover:bg-gray-50">
                                        <td class="px-6 py-4 font-semibold text-gray-900">
                                            {medal} " #" {entry.rank.to_string()}
                                        </td>
                                        <td class="px-6 py-4 text-gray-900">{entry.name}</td>
                                        <td class="px-6 py-4 text-right font-medium text-gray-900">
                                            "$" {entry.total_donated.to_string()}
                                        </td>
                                        <td class="px-6 py-4 text-right text-gray-600">
                                            {entry.campaigns_supported.to_string()}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="bg-indigo-50 border border-indigo-100 rounded-xl p-5 mt-6 flex items-center justify-between">
                <div>
                    <p class="font-semibold text-gray-900">"Your rank: #47"</p>
                    <p class="text-sm text-gray-600">"$2,450 donated across 12 campaigns"</p>
                </div>
                <a href="/campaigns" class="text-sm font-medium text-indigo-600 hover:text-indigo-700">
                    "Climb the board →"
                </a>
            </div>
        </div>
    }
}
