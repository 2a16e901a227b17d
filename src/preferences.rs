//! Settings panel
//!
//! Display preferences for the feed: layout mode, theme, density and a set of
//! boolean switches. Most switches are plain toggles; a few only make sense
//! for signed-in users and ask the caller to show the login prompt instead of
//! changing anything when the user is anonymous.

use crate::flags::AuthState;
use crate::store::{PreferenceStore, StoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Origin reported with login prompts raised from the settings panel
pub const LOGIN_ORIGIN: &str = "settings";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    /// Follow the system color scheme
    Auto,
}

/// Card density in the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Eco,
    Roomy,
    Cozy,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::Auto];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Auto => "Auto",
        }
    }
}

impl Density {
    pub const ALL: [Self; 3] = [Self::Eco, Self::Roomy, Self::Cozy];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eco => "Eco",
            Self::Roomy => "Roomy",
            Self::Cozy => "Cozy",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown theme '{other}' (expected dark, light or auto)")),
        }
    }
}

impl FromStr for Density {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eco" => Ok(Self::Eco),
            "roomy" => Ok(Self::Roomy),
            "cozy" => Ok(Self::Cozy),
            other => Err(format!("unknown density '{other}' (expected eco, roomy or cozy)")),
        }
    }
}

/// Stored display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Compact list layout instead of cards
    pub insane_mode: bool,
    pub theme: ThemeMode,
    pub spaciness: Density,
    /// Hide posts the user already read
    pub show_only_unread_posts: bool,
    pub open_new_tab: bool,
    /// Custom shortcuts row, browser extension only
    pub show_top_sites: bool,
    /// Show the feed sorting menu
    pub sorting_enabled: bool,
    pub opt_out_weekly_goal: bool,
    pub auto_dismiss_notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            insane_mode: false,
            theme: ThemeMode::Dark,
            spaciness: Density::Eco,
            show_only_unread_posts: false,
            open_new_tab: true,
            show_top_sites: true,
            sorting_enabled: true,
            opt_out_weekly_goal: false,
            auto_dismiss_notifications: true,
        }
    }
}

/// A boolean switch on the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceToggle {
    InsaneMode,
    ShowOnlyUnreadPosts,
    OpenNewTab,
    ShowTopSites,
    SortingEnabled,
    OptOutWeeklyGoal,
    AutoDismissNotifications,
}

impl PreferenceToggle {
    pub const ALL: [Self; 7] = [
        Self::InsaneMode,
        Self::ShowOnlyUnreadPosts,
        Self::OpenNewTab,
        Self::ShowTopSites,
        Self::SortingEnabled,
        Self::OptOutWeeklyGoal,
        Self::AutoDismissNotifications,
    ];

    /// Switches that only signed-in users may change
    #[must_use]
    pub const fn requires_login(self) -> bool {
        matches!(self, Self::ShowOnlyUnreadPosts | Self::OptOutWeeklyGoal)
    }

    /// Kebab-case name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InsaneMode => "insane-mode",
            Self::ShowOnlyUnreadPosts => "hide-read",
            Self::OpenNewTab => "new-tab",
            Self::ShowTopSites => "top-sites",
            Self::SortingEnabled => "feed-sorting",
            Self::OptOutWeeklyGoal => "weekly-goal-widget",
            Self::AutoDismissNotifications => "auto-dismiss-notifications",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsaneMode => "Compact list layout",
            Self::ShowOnlyUnreadPosts => "Hide read posts",
            Self::OpenNewTab => "Open links in new tab",
            Self::ShowTopSites => "Show custom shortcuts",
            Self::SortingEnabled => "Show feed sorting menu",
            Self::OptOutWeeklyGoal => "Show Weekly Goal widget",
            Self::AutoDismissNotifications => "Automatically dismiss notifications",
        }
    }

    fn slot(self, prefs: &mut UserPreferences) -> &mut bool {
        match self {
            Self::InsaneMode => &mut prefs.insane_mode,
            Self::ShowOnlyUnreadPosts => &mut prefs.show_only_unread_posts,
            Self::OpenNewTab => &mut prefs.open_new_tab,
            Self::ShowTopSites => &mut prefs.show_top_sites,
            Self::SortingEnabled => &mut prefs.sorting_enabled,
            Self::OptOutWeeklyGoal => &mut prefs.opt_out_weekly_goal,
            Self::AutoDismissNotifications => &mut prefs.auto_dismiss_notifications,
        }
    }

    /// Value shown on the switch; the weekly goal switch is displayed inverted
    #[must_use]
    pub const fn displayed(self, prefs: &UserPreferences) -> bool {
        match self {
            Self::InsaneMode => prefs.insane_mode,
            Self::ShowOnlyUnreadPosts => prefs.show_only_unread_posts,
            Self::OpenNewTab => prefs.open_new_tab,
            Self::ShowTopSites => prefs.show_top_sites,
            Self::SortingEnabled => prefs.sorting_enabled,
            Self::OptOutWeeklyGoal => !prefs.opt_out_weekly_goal,
            Self::AutoDismissNotifications => prefs.auto_dismiss_notifications,
        }
    }
}

impl fmt::Display for PreferenceToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PreferenceToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|toggle| toggle.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|t| t.name()).collect();
                format!("unknown preference '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Result of flipping a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The stored value was flipped to the contained value
    Toggled(bool),
    /// Nothing changed; the caller should show the login prompt
    LoginRequired { origin: &'static str },
}

/// Where the panel is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelEnvironment {
    /// Running as the browser extension (new tab page)
    pub is_extension: bool,
    /// The host can follow the system color scheme
    pub supports_color_scheme: bool,
}

/// A rendered switch row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRow {
    pub toggle: PreferenceToggle,
    pub label: &'static str,
    pub checked: bool,
}

/// A rendered radio group option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Panel section contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    /// Card/list icon switch
    LayoutSwitch { compact: bool },
    Radio(Vec<RadioOption>),
    Switches(Vec<SwitchRow>),
}

/// Titled panel section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSection {
    pub title: &'static str,
    pub content: SectionContent,
}

/// Settings panel bound to a preference store
pub struct SettingsPanel<'a, S: PreferenceStore + ?Sized> {
    store: &'a S,
    preferences: UserPreferences,
}

impl<'a, S: PreferenceStore + ?Sized> SettingsPanel<'a, S> {
    /// Load the panel from the store
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if stored preferences cannot be read.
    pub fn load(store: &'a S) -> Result<Self, StoreError> {
        let preferences = store.load_preferences()?;
        Ok(Self { store, preferences })
    }

    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Flip a switch and persist the change
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if saving fails.
    pub fn toggle(
        &mut self,
        toggle: PreferenceToggle,
        auth: &AuthState,
    ) -> Result<ToggleOutcome, StoreError> {
        if toggle.requires_login() && !auth.is_authenticated() {
            return Ok(ToggleOutcome::LoginRequired {
                origin: LOGIN_ORIGIN,
            });
        }

        let mut next = self.preferences.clone();
        let slot = toggle.slot(&mut next);
        *slot = !*slot;
        let value = *slot;
        self.commit(next)?;
        Ok(ToggleOutcome::Toggled(value))
    }

    /// # Errors
    ///
    /// Returns `StoreError` if saving fails.
    pub fn set_theme(&mut self, theme: ThemeMode) -> Result<(), StoreError> {
        self.commit(UserPreferences {
            theme,
            ..self.preferences.clone()
        })
    }

    /// # Errors
    ///
    /// Returns `StoreError` if saving fails.
    pub fn set_density(&mut self, density: Density) -> Result<(), StoreError> {
        self.commit(UserPreferences {
            spaciness: density,
            ..self.preferences.clone()
        })
    }

    /// The panel only shows what the store accepted
    fn commit(&mut self, next: UserPreferences) -> Result<(), StoreError> {
        self.store.save_preferences(&next)?;
        self.preferences = next;
        Ok(())
    }

    /// Build the panel sections for the given environment
    #[must_use]
    pub fn sections(&self, env: PanelEnvironment) -> Vec<PanelSection> {
        let prefs = &self.preferences;

        let themes = available_themes(env)
            .into_iter()
            .map(|theme| RadioOption {
                label: theme.label(),
                selected: theme == prefs.theme,
            })
            .collect();

        let densities = Density::ALL
            .into_iter()
            .map(|density| RadioOption {
                label: density.label(),
                selected: density == prefs.spaciness,
            })
            .collect();

        let switch = |toggle: PreferenceToggle| SwitchRow {
            toggle,
            label: toggle.label(),
            checked: toggle.displayed(prefs),
        };

        let mut preference_rows = vec![
            switch(PreferenceToggle::ShowOnlyUnreadPosts),
            switch(PreferenceToggle::OpenNewTab),
        ];
        if env.is_extension {
            preference_rows.push(switch(PreferenceToggle::ShowTopSites));
        }
        preference_rows.push(switch(PreferenceToggle::SortingEnabled));
        preference_rows.push(switch(PreferenceToggle::OptOutWeeklyGoal));

        vec![
            PanelSection {
                title: "Layout",
                content: SectionContent::LayoutSwitch {
                    compact: prefs.insane_mode,
                },
            },
            PanelSection {
                title: "Theme",
                content: SectionContent::Radio(themes),
            },
            PanelSection {
                title: "Density",
                content: SectionContent::Radio(densities),
            },
            PanelSection {
                title: "Preferences",
                content: SectionContent::Switches(preference_rows),
            },
            PanelSection {
                title: "Accessibility",
                content: SectionContent::Switches(vec![switch(
                    PreferenceToggle::AutoDismissNotifications,
                )]),
            },
        ]
    }
}

/// Theme choices, dropping `Auto` where the host has no color scheme support
#[must_use]
pub fn available_themes(env: PanelEnvironment) -> Vec<ThemeMode> {
    ThemeMode::ALL
        .into_iter()
        .filter(|theme| env.supports_color_scheme || *theme != ThemeMode::Auto)
        .collect()
}
