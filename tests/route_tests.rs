//! The routing layer performs no authorization check before rendering
//! role-scoped pages: a direct request for an admin path renders the admin
//! content in any session state, including the unauthenticated one. These
//! tests pin that observed behavior.

#[cfg(feature = "ssr")]
pub mod route_tests {
    use charityconnect::frontend::pages::admin::AdminDashboard;
    use charityconnect::frontend::pages::donor::DonorDashboard;
    use charityconnect::frontend::pages::NotFound;
    use leptos::prelude::*;

    fn render_to_string<F, N>(component: F) -> String
    where
        F: FnOnce() -> N,
        N: IntoView,
    {
        Owner::new().with(|| component().into_view().to_html())
    }

    #[test]
    fn test_admin_dashboard_renders_without_any_session() {
        let html = render_to_string(AdminDashboard);

        assert!(html.contains("Admin Dashboard"));
        assert!(html.contains("Pending Campaign Approvals"));
    }

    #[test]
    fn test_donor_dashboard_renders_without_any_session() {
        let html = render_to_string(DonorDashboard);

        assert!(html.contains("Donor Dashboard"));
        assert!(html.contains("Recent Donations"));
    }

    #[test]
    fn test_not_found_page_renders_catch_all_content() {
        let html = render_to_string(NotFound);

        assert!(html.contains("404"));
        assert!(html.contains("Page not found"));
    }
}
