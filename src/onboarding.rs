//! Feed personalization onboarding
//!
//! Builds the intro ("create my feed") modal from the onboarding flag and
//! drives the small flow between the intro and the tag filter modal.

use crate::flags::{FeatureFlags, FeedFilterVariant, OnboardingVariant};

/// Decorative tag cloud; blank cells are spacers
pub const TAG_CLOUD: [[&str; 5]; 4] = [
    ["", "docker", "", "kubernetes", ""],
    ["", "", "architecture", "", ""],
    ["", "", "", "devops", ""],
    ["", "cloud", "", "", ""],
];

/// Footer alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAlign {
    Start,
    Center,
    SpaceBetween,
}

/// Footer buttons and layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalFooter {
    pub align: FooterAlign,
    pub show_skip: bool,
    pub primary_label: &'static str,
}

impl ModalFooter {
    #[must_use]
    pub const fn for_variant(variant: OnboardingVariant) -> Self {
        match variant {
            OnboardingVariant::IntroTest1 | OnboardingVariant::Test1 => Self {
                align: FooterAlign::Center,
                show_skip: false,
                primary_label: "Create my feed",
            },
            OnboardingVariant::IntroTest2 | OnboardingVariant::Test2 => Self {
                align: FooterAlign::SpaceBetween,
                show_skip: true,
                primary_label: "Continue",
            },
            OnboardingVariant::Control => Self {
                align: FooterAlign::Start,
                show_skip: false,
                primary_label: "Continue",
            },
        }
    }
}

/// One cell of the tag cloud
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudCell {
    pub tag: Option<&'static str>,
    pub is_first: bool,
    pub is_last: bool,
}

/// Intro modal contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroModal {
    pub title: String,
    pub explainer: String,
    pub cloud: Vec<Vec<CloudCell>>,
    pub footer: ModalFooter,
}

impl IntroModal {
    #[must_use]
    pub fn new(flags: &FeatureFlags) -> Self {
        Self {
            title: flags.button_copy.clone(),
            explainer: flags.explainer_copy.clone(),
            cloud: tag_cloud(),
            footer: ModalFooter::for_variant(flags.onboarding_variant()),
        }
    }
}

/// The static tag cloud with row position markers
#[must_use]
pub fn tag_cloud() -> Vec<Vec<CloudCell>> {
    TAG_CLOUD
        .iter()
        .map(|row| {
            let last = row.len() - 1;
            row.iter()
                .enumerate()
                .map(|(i, tag)| CloudCell {
                    tag: (!tag.is_empty()).then_some(*tag),
                    is_first: i == 0,
                    is_last: i == last,
                })
                .collect()
        })
        .collect()
}

/// Where the onboarding flow is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Intro,
    /// Inline tag filter modal replaced the intro
    FilterModalOpen,
    Closed,
}

/// What the caller must do after a flow transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEffect {
    None,
    /// Open the external tag filter panel; the modal is closed
    OpenFilters,
}

/// Intro → filter modal flow for new users
#[derive(Debug)]
pub struct CreateMyFeedFlow {
    state: FlowState,
    filter_variant: FeedFilterVariant,
}

impl CreateMyFeedFlow {
    #[must_use]
    pub fn new(flags: &FeatureFlags) -> Self {
        Self {
            state: FlowState::Intro,
            filter_variant: flags.feed_filter_variant(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> FlowState {
        self.state
    }

    /// Primary footer button
    pub fn primary(&mut self) -> FlowEffect {
        if self.state != FlowState::Intro {
            return FlowEffect::None;
        }
        if self.filter_variant == FeedFilterVariant::V1 {
            self.state = FlowState::Closed;
            FlowEffect::OpenFilters
        } else {
            self.state = FlowState::FilterModalOpen;
            FlowEffect::None
        }
    }

    /// Skip button or modal dismissal
    pub fn close(&mut self) {
        self.state = FlowState::Closed;
    }
}
