//! Campaign-creation wizard state machine.
//!
//! An ordered sequence of four steps. `next` advances only when the current
//! step's required fields are filled; `previous` always moves back one step.
//! Submission logs the draft and discards it; nothing is persisted.

use crate::models::CampaignDraft;

/// The four wizard steps, in order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    StoryMedia,
    Planning,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::BasicInfo,
        WizardStep::StoryMedia,
        WizardStep::Planning,
        WizardStep::Review,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Info",
            WizardStep::StoryMedia => "Story & Media",
            WizardStep::Planning => "Planning",
            WizardStep::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Campaign title, goal, and category",
            WizardStep::StoryMedia => "Tell your story with images and details",
            WizardStep::Planning => "Timeline, budget, and implementation",
            WizardStep::Review => "Review and publish your campaign",
        }
    }

    fn succ(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::StoryMedia),
            WizardStep::StoryMedia => Some(WizardStep::Planning),
            WizardStep::Planning => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    fn pred(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::StoryMedia => Some(WizardStep::BasicInfo),
            WizardStep::Planning => Some(WizardStep::StoryMedia),
            WizardStep::Review => Some(WizardStep::Planning),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignWizard {
    step: WizardStep,
    pub draft: CampaignDraft,
}

impl CampaignWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Required-field predicate for the current step. The review step has no
    /// predicate and is always valid.
    pub fn step_valid(&self) -> bool {
        let d = &self.draft;
        match self.step {
            WizardStep::BasicInfo => {
                !d.title.is_empty()
                    && !d.goal.is_empty()
                    && !d.category.is_empty()
                    && !d.duration.is_empty()
            }
            WizardStep::StoryMedia => !d.description.is_empty() && !d.story.is_empty(),
            WizardStep::Planning => !d.timeline.is_empty() && !d.budget.is_empty(),
            WizardStep::Review => true,
        }
    }

    /// Advances one step, only if the current step validates. No skip-ahead.
    pub fn next(&mut self) {
        if !self.step_valid() {
            return;
        }
        if let Some(next) = self.step.succ() {
            self.step = next;
        }
    }

    /// Moves back one step unconditionally; no-op at the first step.
    pub fn previous(&mut self) {
        if let Some(prev) = self.step.pred() {
            self.step = prev;
        }
    }

    /// Appends a tag if it is non-empty and not already present. Tags are
    /// ordered and case-sensitive: "Water" and "water" are distinct.
    pub fn add_tag(&mut self, tag: &str) {
        if tag.is_empty() || self.draft.tags.iter().any(|t| t == tag) {
            return;
        }
        self.draft.tags.push(tag.to_string());
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.draft.tags.retain(|t| t != tag);
    }

    /// Terminal action: logs the draft. The caller navigates away and the
    /// draft is not retained.
    pub fn submit(&self) {
        leptos::logging::log!("Campaign draft submitted: {:?}", self.draft);
    }
}
