use serde::{Deserialize, Serialize};

/// Working state of the campaign-creation wizard. Created empty when the
/// wizard mounts, mutated field by field, and discarded on submit; nothing
/// is persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub goal: String,
    pub duration: String,
    pub category: String,
    pub location: String,
    pub story: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub beneficiaries: String,
    pub timeline: String,
    pub budget: String,
    pub risks: String,
}

/// Categories offered by the wizard's category selector.
pub const CAMPAIGN_CATEGORIES: [&str; 10] = [
    "Health & Medical",
    "Education",
    "Environment",
    "Emergency Relief",
    "Animals & Wildlife",
    "Community Development",
    "Children & Youth",
    "Arts & Culture",
    "Sports & Recreation",
    "Technology",
];
