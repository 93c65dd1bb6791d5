mod common;

#[cfg(test)]
pub mod identity_tests {
    use std::time::Instant;

    use charityconnect::models::Role;
    use charityconnect::services::identity::{resolve_login, resolve_register};

    #[tokio::test]
    async fn test_login_display_name_follows_role_table() {
        for role in Role::SELECTABLE {
            let identity = resolve_login(
                format!("{}@demo.com", role.as_str()),
                "demo123".to_string(),
                role,
            )
            .await;

            assert_eq!(identity.role, role);
            assert_eq!(identity.name, role.display_name());
        }
    }

    #[tokio::test]
    async fn test_login_as_admin_end_to_end() {
        let identity =
            resolve_login("a@b.com".to_string(), "x".to_string(), Role::Admin).await;

        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.name, "Admin User");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.id, "1");
    }

    #[tokio::test]
    async fn test_login_takes_at_least_the_fixed_delay() {
        let start = Instant::now();
        let _ = resolve_login("a@b.com".to_string(), "x".to_string(), Role::Donor).await;

        assert!(start.elapsed().as_millis() >= 1000);
    }

    #[tokio::test]
    async fn test_login_never_checks_the_password() {
        let identity =
            resolve_login("a@b.com".to_string(), String::new(), Role::Donor).await;

        assert_eq!(identity.role, Role::Donor);
        assert_eq!(identity.name, "John Donor");
    }

    #[tokio::test]
    async fn test_login_public_role_gets_public_user_name() {
        let identity =
            resolve_login("a@b.com".to_string(), "x".to_string(), Role::Public).await;

        assert_eq!(identity.name, "Public User");
    }

    #[tokio::test]
    async fn test_register_keeps_supplied_name() {
        let identity = resolve_register(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            "hunter2".to_string(),
            Role::CampaignLeader,
        )
        .await;

        assert_eq!(identity.name, "Jane Doe");
        assert_eq!(identity.email, "jane@example.com");
        assert_eq!(identity.role, Role::CampaignLeader);
    }

    #[tokio::test]
    async fn test_register_id_is_timestamp_derived() {
        let identity = resolve_register(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            "hunter2".to_string(),
            Role::Donor,
        )
        .await;

        // Millisecond timestamps are comfortably in this range for decades.
        let millis: i64 = identity.id.parse().expect("id should be numeric");
        assert!(millis > 1_600_000_000_000);
    }

    #[tokio::test]
    async fn test_avatar_url_encodes_display_name() {
        let identity =
            resolve_login("a@b.com".to_string(), "x".to_string(), Role::Donor).await;

        let avatar = identity.avatar_url.expect("avatar should be set");
        assert!(avatar.contains("John%20Donor"));
    }
}
