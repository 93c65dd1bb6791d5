use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <p class="text-white font-bold text-lg mb-3">"❤ CharityConnect"</p>
                        <p class="text-sm text-gray-400">
                            "Connecting generous donors with campaigns that change lives."
                        </p>
                    </div>
                    <div>
                        <p class="text-white font-semibold mb-3">"Explore"</p>
                        <div class="flex flex-col gap-2 text-sm">
                            <a href="/campaigns" class="hover:text-white transition-colors">"Browse Campaigns"</a>
                            <a href="/impact" class="hover:text-white transition-colors">"Impact Report"</a>
                            <a href="/donor/leaderboard" class="hover:text-white transition-colors">"Leaderboard"</a>
                        </div>
                    </div>
                    <div>
                        <p class="text-white font-semibold mb-3">"Company"</p>
                        <div class="flex flex-col gap-2 text-sm">
                            <a href="/about" class="hover:text-white transition-colors">"About Us"</a>
                            <a href="/contact" class="hover:text-white transition-colors">"Contact"</a>
                            <a href="/policies" class="hover:text-white transition-colors">"Policies"</a>
                        </div>
                    </div>
                    <div>
                        <p class="text-white font-semibold mb-3">"Support"</p>
                        <div class="flex flex-col gap-2 text-sm">
                            <a href="/help" class="hover:text-white transition-colors">"Help Center"</a>
                            <a href="/login" class="hover:text-white transition-colors">"Sign In"</a>
                            <a href="/register" class="hover:text-white transition-colors">"Create Account"</a>
                        </div>
                    </div>
                </div>
                <p class="text-center text-sm text-gray-500 mt-10">
                    "© 2024 CharityConnect. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
