use charityconnect::models::{CampaignDraft, Identity, Role};
use charityconnect::wizard::CampaignWizard;

pub fn seed_identity(role: Role) -> Identity {
    Identity {
        id: "1".to_string(),
        name: role.display_name().to_string(),
        email: format!("{}@demo.com", role.as_str()),
        role,
        avatar_url: Some(Identity::avatar_for(role.display_name())),
    }
}

/// Draft with every Basic Info required field filled.
pub fn draft_with_basic_info() -> CampaignDraft {
    CampaignDraft {
        title: "Clean Water for Rural Communities".to_string(),
        goal: "100000".to_string(),
        category: "Health & Medical".to_string(),
        duration: "30".to_string(),
        ..Default::default()
    }
}

/// Wizard positioned at the first step with Basic Info complete.
pub fn wizard_with_basic_info() -> CampaignWizard {
    let mut wizard = CampaignWizard::new();
    wizard.draft = draft_with_basic_info();
    wizard
}
