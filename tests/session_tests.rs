mod common;

#[cfg(test)]
pub mod session_tests {
    use super::common::*;

    use charityconnect::models::{Role, Session};

    #[test]
    fn test_session_starts_unauthenticated() {
        let session = Session::default();

        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert_eq!(session.role(), Role::Public);
    }

    #[test]
    fn test_login_sets_identity_and_role() {
        let mut session = Session::default();
        session.set_identity(seed_identity(Role::Admin));

        assert!(session.is_authenticated());
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(
            session.identity().map(|i| i.name.as_str()),
            Some("Admin User")
        );
    }

    #[test]
    fn test_logout_always_clears() {
        let mut session = Session::default();
        session.set_identity(seed_identity(Role::Donor));
        session.clear();

        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());

        // Idempotent from the cleared state too.
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_second_login_silently_overwrites() {
        let mut session = Session::default();
        session.set_identity(seed_identity(Role::Donor));
        session.set_identity(seed_identity(Role::CampaignLeader));

        assert_eq!(session.role(), Role::CampaignLeader);
        assert_eq!(
            session.identity().map(|i| i.name.as_str()),
            Some("Sarah Leader")
        );
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in [Role::Public, Role::Donor, Role::CampaignLeader, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_or_donor_defaults_invalid_values() {
        assert_eq!(Role::parse_or_donor("donor"), Role::Donor);
        assert_eq!(Role::parse_or_donor("admin"), Role::Admin);
        assert_eq!(Role::parse_or_donor("campaign-leader"), Role::CampaignLeader);
        assert_eq!(Role::parse_or_donor("superuser"), Role::Donor);
        assert_eq!(Role::parse_or_donor(""), Role::Donor);
    }

    #[test]
    fn test_dashboard_path_by_role() {
        assert_eq!(Role::Donor.dashboard_path(), "/donor/dashboard");
        assert_eq!(Role::CampaignLeader.dashboard_path(), "/leader/dashboard");
        assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
        assert_eq!(Role::Public.dashboard_path(), "/");
    }
}
