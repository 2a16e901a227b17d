//! Authentication state and feature flags
//!
//! Feature flags arrive as free-form variant strings. They are parsed once
//! into closed enums here; unknown values fall back to the control variant so
//! every layout decision below is an exhaustive match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is looking at the feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated { user_id: String },
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Variant of the feed filter modal experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFilterVariant {
    V1,
    V2,
    V3,
    V4,
    V5,
    /// Unknown or unset variant
    #[default]
    Control,
}

impl FeedFilterVariant {
    /// Parse a flag value; anything unrecognised is `Control`
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "v1" => Self::V1,
            "v2" => Self::V2,
            "v3" => Self::V3,
            "v4" => Self::V4,
            "v5" => Self::V5,
            _ => Self::Control,
        }
    }

    /// Layout choices driven by this variant
    #[must_use]
    pub const fn layout(self) -> FilterLayout {
        FilterLayout {
            reversed_header: matches!(self, Self::V3 | Self::V5),
            search_spacing: match self {
                Self::V3 => Spacing::Loose,
                Self::V5 => Spacing::Tight,
                Self::V1 | Self::V2 | Self::V4 | Self::Control => Spacing::Default,
            },
            show_headline: matches!(self, Self::V1 | Self::V2 | Self::V4),
            paragraph_spacing: match self {
                Self::V4 => Spacing::Tight,
                Self::V5 => Spacing::Loose,
                Self::V1 | Self::V2 | Self::V3 | Self::Control => Spacing::None,
            },
        }
    }
}

impl fmt::Display for FeedFilterVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
            Self::V4 => "v4",
            Self::V5 => "v5",
            Self::Control => "control",
        };
        f.write_str(name)
    }
}

/// Vertical spacing bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    None,
    Tight,
    Default,
    Loose,
}

/// Header layout of the tag filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterLayout {
    /// Intro copy above the search field instead of below
    pub reversed_header: bool,
    pub search_spacing: Spacing,
    /// Show the "Choose tags to follow" headline
    pub show_headline: bool,
    pub paragraph_spacing: Spacing,
}

/// Onboarding modal experiment variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingVariant {
    IntroTest1,
    IntroTest2,
    Test1,
    Test2,
    #[default]
    Control,
}

impl OnboardingVariant {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "introTest1" => Self::IntroTest1,
            "introTest2" => Self::IntroTest2,
            "test1" => Self::Test1,
            "test2" => Self::Test2,
            _ => Self::Control,
        }
    }
}

pub const DEFAULT_BUTTON_COPY: &str = "Create my feed";
pub const DEFAULT_EXPLAINER_COPY: &str = "Devs with a personal feed get 11.5x more relevant articles";

/// Evaluated feature flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Personalized "my feed" experience is enabled
    pub personalized_feed: bool,
    /// Raw feed filter modal variant
    pub feed_filter_modal: String,
    /// Raw onboarding modal variant
    pub onboarding: String,
    pub button_copy: String,
    pub explainer_copy: String,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            personalized_feed: false,
            feed_filter_modal: String::new(),
            onboarding: String::new(),
            button_copy: DEFAULT_BUTTON_COPY.to_string(),
            explainer_copy: DEFAULT_EXPLAINER_COPY.to_string(),
        }
    }
}

impl FeatureFlags {
    #[must_use]
    pub fn feed_filter_variant(&self) -> FeedFilterVariant {
        FeedFilterVariant::parse(&self.feed_filter_modal)
    }

    #[must_use]
    pub fn onboarding_variant(&self) -> OnboardingVariant {
        OnboardingVariant::parse(&self.onboarding)
    }
}
