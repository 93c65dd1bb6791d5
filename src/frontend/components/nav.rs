use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::frontend::session::use_session;
use crate::models::Role;

/// Top navigation bar. Swaps its link set based on the session role; this is
/// cosmetic gating only, the routes themselves stay reachable by direct URL.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let role_links = move || -> Vec<(&'static str, &'static str)> {
        match session.role() {
            Role::Donor => vec![
                ("/donor/dashboard", "Dashboard"),
                ("/donor/leaderboard", "Leaderboard"),
                ("/donor/notifications", "Notifications"),
                ("/donor/profile", "Profile"),
            ],
            Role::CampaignLeader => vec![
                ("/leader/dashboard", "Dashboard"),
                ("/leader/campaigns", "My Campaigns"),
                ("/leader/create", "Create Campaign"),
                ("/leader/analytics", "Analytics"),
            ],
            Role::Admin => vec![
                ("/admin/dashboard", "Dashboard"),
                ("/admin/campaigns", "Campaigns"),
                ("/admin/users", "Users"),
                ("/admin/reports", "Reports"),
            ],
            Role::Public => Vec::new(),
        }
    };

    let on_logout = Callback::new(move |_| {
        session.logout();
        navigate("/", Default::default());
    });

    view! {
        <nav class="sticky top-0 z-50 bg-white/90 backdrop-blur-md border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-2">
                    <span class="w-9 h-9 bg-gradient-to-r from-indigo-600 to-blue-600 rounded-lg flex items-center justify-center text-white">"❤"</span>
                    <span class="text-xl font-bold bg-gradient-to-r from-indigo-600 to-blue-600 bg-clip-text text-transparent">
                        "CharityConnect"
                    </span>
                </a>
                <div class="hidden md:flex items-center gap-6">
                    <a href="/campaigns" class="text-gray-600 hover:text-gray-900 transition-colors">"Campaigns"</a>
                    <a href="/about" class="text-gray-600 hover:text-gray-900 transition-colors">"About"</a>
                    <a href="/help" class="text-gray-600 hover:text-gray-900 transition-colors">"Help"</a>
                    <For
                        each=role_links
                        key=|(path, _)| *path
                        children=|(path, label)| {
                            view! {
                                <a href=path class="text-gray-600 hover:text-gray-900 transition-colors">{label}</a>
                            }
                        }
                    />
                </div>
                <div class="flex items-center gap-3">
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login" class="text-gray-600 hover:text-gray-900 text-sm px-4 py-2">"Login"</a>
                                <a
                                    href="/register"
                                    class="bg-gradient-to-r from-indigo-600 to-blue-600 text-white text-sm px-4 py-2 rounded-lg hover:from-indigo-700 hover:to-blue-700 transition-all"
                                >
                                    "Get Started"
                                </a>
                            }
                        }
                    >
                        <span class="text-sm text-gray-700 font-medium">
                            {move || session.identity().map(|i| i.name).unwrap_or_default()}
                        </span>
                        <button
                            on:click=move |ev| on_logout.run(ev)
                            class="text-sm text-gray-600 hover:text-gray-900 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition-all"
                        >
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
