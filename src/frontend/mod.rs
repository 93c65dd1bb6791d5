pub mod components;
pub mod pages;
pub mod session;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use components::{Footer, Navbar};
use pages::admin::{AdminDashboard, CampaignManagement, PlatformReports, UserManagement};
use pages::auth::{LoginPage, RegisterPage};
use pages::donor::{DonorDashboard, DonorLeaderboard, DonorNotifications, DonorProfile};
use pages::leader::{CreateCampaign, LeaderAnalytics, LeaderDashboard, MyCampaigns};
use pages::public::{
    AboutPage, CampaignDetailsPage, CampaignListPage, ContactPage, DonatePage,
    DonationConfirmationPage, HelpPage, HomePage, ImpactPage, PoliciesPage,
};
use pages::NotFound;
use session::provide_session;

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Main application component with routing.
///
/// The route table is purely declarative dispatch: the path determines the
/// page with no session check before rendering, so role-scoped paths are
/// reachable by direct URL in any session state. The navbar hides links by
/// role, which is the only (cosmetic) gating.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/charityconnect.css"/>
        <Title text="CharityConnect - Make a Difference"/>
        <Meta name="description" content="A donation platform connecting donors with campaigns that change lives"/>

        <Router>
            <div class="min-h-screen flex flex-col bg-gray-50">
                <Navbar/>
                <main class="flex-1">
                    <Routes fallback=|| view! { <NotFound/> }>
                        // Public routes
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/about") view=AboutPage/>
                        <Route path=path!("/help") view=HelpPage/>
                        <Route path=path!("/policies") view=PoliciesPage/>
                        <Route path=path!("/contact") view=ContactPage/>
                        <Route path=path!("/campaigns") view=CampaignListPage/>
                        <Route path=path!("/campaigns/:id") view=CampaignDetailsPage/>
                        <Route path=path!("/donate/:id") view=DonatePage/>
                        <Route path=path!("/donation-confirmation/:id") view=DonationConfirmationPage/>
                        <Route path=path!("/impact") view=ImpactPage/>

                        // Auth routes
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>

                        // Donor routes
                        <Route path=path!("/donor/dashboard") view=DonorDashboard/>
                        <Route path=path!("/donor/profile") view=DonorProfile/>
                        <Route path=path!("/donor/notifications") view=DonorNotifications/>
                        <Route path=path!("/donor/leaderboard") view=DonorLeaderboard/>

                        // Campaign leader routes
                        <Route path=path!("/leader/dashboard") view=LeaderDashboard/>
                        <Route path=path!("/leader/campaigns") view=MyCampaigns/>
                        <Route path=path!("/leader/create") view=CreateCampaign/>
                        <Route path=path!("/leader/analytics") view=LeaderAnalytics/>

                        // Admin routes
                        <Route path=path!("/admin/dashboard") view=AdminDashboard/>
                        <Route path=path!("/admin/campaigns") view=CampaignManagement/>
                        <Route path=path!("/admin/users") view=UserManagement/>
                        <Route path=path!("/admin/reports") view=PlatformReports/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
