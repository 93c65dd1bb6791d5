mod common;

#[cfg(test)]
pub mod wizard_tests {
    use super::common::*;

    use charityconnect::wizard::{CampaignWizard, WizardStep};

    #[test]
    fn test_wizard_starts_at_basic_info_with_empty_draft() {
        let wizard = CampaignWizard::new();

        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert!(wizard.draft.title.is_empty());
        assert!(wizard.draft.tags.is_empty());
    }

    #[test]
    fn test_next_is_noop_when_required_fields_missing() {
        let mut wizard = CampaignWizard::new();
        wizard.draft.title = "Help kids".to_string();
        // goal, category, duration still empty

        wizard.next();

        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_next_advances_when_step_is_valid() {
        let mut wizard = wizard_with_basic_info();

        wizard.next();

        assert_eq!(wizard.step(), WizardStep::StoryMedia);
    }

    #[test]
    fn test_no_skip_ahead_past_an_incomplete_step() {
        let mut wizard = wizard_with_basic_info();
        wizard.next();

        // Story & Media requires description and story; only one is set.
        wizard.draft.description = "Short summary".to_string();
        wizard.next();

        assert_eq!(wizard.step(), WizardStep::StoryMedia);
    }

    #[test]
    fn test_full_walk_to_review() {
        let mut wizard = wizard_with_basic_info();
        wizard.next();

        wizard.draft.description = "Short summary".to_string();
        wizard.draft.story = "The full story".to_string();
        wizard.next();

        wizard.draft.timeline = "Q1: drill wells".to_string();
        wizard.draft.budget = "80% construction, 20% logistics".to_string();
        wizard.next();

        assert_eq!(wizard.step(), WizardStep::Review);

        // Review is terminal; next is a no-op there.
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::Review);
    }

    #[test]
    fn test_previous_is_noop_at_first_step() {
        let mut wizard = CampaignWizard::new();

        wizard.previous();

        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_previous_is_unconditional() {
        let mut wizard = wizard_with_basic_info();
        wizard.next();
        assert_eq!(wizard.step(), WizardStep::StoryMedia);

        // Current step's required fields were never filled; back still works.
        wizard.previous();

        assert_eq!(wizard.step(), WizardStep::BasicInfo);
    }

    #[test]
    fn test_review_step_is_always_valid() {
        let mut wizard = wizard_with_basic_info();
        wizard.next();
        wizard.draft.description = "d".to_string();
        wizard.draft.story = "s".to_string();
        wizard.next();
        wizard.draft.timeline = "t".to_string();
        wizard.draft.budget = "b".to_string();
        wizard.next();

        assert!(wizard.step_valid());
    }

    #[test]
    fn test_add_tag_deduplicates() {
        let mut wizard = CampaignWizard::new();

        wizard.add_tag("water");
        wizard.add_tag("water");

        assert_eq!(wizard.draft.tags, vec!["water"]);
    }

    #[test]
    fn test_add_empty_tag_is_noop() {
        let mut wizard = CampaignWizard::new();

        wizard.add_tag("");

        assert!(wizard.draft.tags.is_empty());
    }

    #[test]
    fn test_tags_are_case_sensitive_and_ordered() {
        let mut wizard = CampaignWizard::new();

        wizard.add_tag("Water");
        wizard.add_tag("water");
        wizard.add_tag("sanitation");

        assert_eq!(wizard.draft.tags, vec!["Water", "water", "sanitation"]);
    }

    #[test]
    fn test_remove_tag_filters_only_exact_matches() {
        let mut wizard = CampaignWizard::new();
        wizard.add_tag("Water");
        wizard.add_tag("water");

        wizard.remove_tag("water");

        assert_eq!(wizard.draft.tags, vec!["Water"]);
    }

    #[test]
    fn test_step_titles_in_order() {
        let titles: Vec<_> = WizardStep::ALL.iter().map(|s| s.title()).collect();

        assert_eq!(
            titles,
            vec!["Basic Info", "Story & Media", "Planning", "Review"]
        );
    }
}
