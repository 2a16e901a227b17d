//! Configuration module for feedtags
//!
//! Manages application configuration: database locations, the signed-in
//! user, unblock policy, search cache sizing and feature flags.
//! Configuration is stored in the user's config directory
//! (`~/.config/feedtags/config.toml` on Linux).

mod setup;

pub use setup::first_time_setup;

use crate::filter::{MAX_UNDO_WINDOW, UnblockPolicy};
use crate::flags::{AuthState, FeatureFlags};
use crate::search::cache::{DEFAULT_CAPACITY, DEFAULT_TTL, MAX_TTL};
use chrono::TimeDelta;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Search cache and result sizing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of cached queries
    pub cache_capacity: u64,
    /// Seconds a cached result stays valid
    pub cache_ttl_secs: u64,
    /// Maximum number of results per query
    pub result_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
            result_limit: 50,
        }
    }
}

impl SearchSettings {
    /// Cache lifetime, capped at the cache's maximum
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs).min(MAX_TTL)
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Map of database names to their filesystem paths
    pub databases: HashMap<String, PathBuf>,

    /// The default database to use when none is specified
    pub default_database: Option<String>,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Signed-in user; anonymous when unset
    pub user_id: Option<String>,

    /// TOML tag catalog; the built-in catalog is used when unset
    pub categories_file: Option<PathBuf>,

    pub unblock_policy: UnblockPolicy,

    /// Length of the undo window for deferred unblocks
    pub undo_window_secs: u64,

    pub search: SearchSettings,

    pub flags: FeatureFlags,

    /// `tracing` filter directive used when `FEEDTAGS_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            databases: HashMap::new(),
            default_database: None,
            quiet: false,
            user_id: None,
            categories_file: None,
            unblock_policy: UnblockPolicy::default(),
            undo_window_secs: 5,
            search: SearchSettings::default(),
            flags: FeatureFlags::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

const KEYS: &[&str] = &[
    "quiet",
    "user_id",
    "categories_file",
    "unblock_policy",
    "undo_window_secs",
    "log_filter",
    "search.cache_capacity",
    "search.cache_ttl_secs",
    "search.result_limit",
    "flags.personalized_feed",
    "flags.feed_filter_modal",
    "flags.onboarding",
];

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("feedtags").join("config.toml"))
    }

    /// Default location for a named database
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_database_path(name: &str) -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("feedtags").join(name))
    }

    /// Load configuration from the default file, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Path of the named database, or the default database
    ///
    /// Falls back to `<data dir>/feedtags/default` when nothing is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `name` is not configured or no data directory exists.
    pub fn resolve_database(&self, name: Option<&str>) -> Result<PathBuf, ConfigError> {
        match name.or(self.default_database.as_deref()) {
            Some(name) => self.databases.get(name).cloned().ok_or_else(|| {
                ConfigError::Message(format!("Database '{name}' does not exist in configuration"))
            }),
            None => Self::default_database_path("default"),
        }
    }

    /// Who the CLI acts as
    #[must_use]
    pub fn auth_state(&self) -> AuthState {
        match &self.user_id {
            Some(user_id) if !user_id.is_empty() => AuthState::Authenticated {
                user_id: user_id.clone(),
            },
            _ => AuthState::Anonymous,
        }
    }

    /// Undo window, capped at [`MAX_UNDO_WINDOW`]
    #[must_use]
    pub fn undo_window(&self) -> TimeDelta {
        i64::try_from(self.undo_window_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .map_or(MAX_UNDO_WINDOW, |window| window.min(MAX_UNDO_WINDOW))
    }

    /// Read a setting by dotted key
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "quiet" => self.quiet.to_string(),
            "user_id" => self.user_id.clone().unwrap_or_default(),
            "categories_file" => self
                .categories_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "unblock_policy" => policy_name(self.unblock_policy).to_string(),
            "undo_window_secs" => self.undo_window_secs.to_string(),
            "log_filter" => self.log_filter.clone(),
            "search.cache_capacity" => self.search.cache_capacity.to_string(),
            "search.cache_ttl_secs" => self.search.cache_ttl_secs.to_string(),
            "search.result_limit" => self.search.result_limit.to_string(),
            "flags.personalized_feed" => self.flags.personalized_feed.to_string(),
            "flags.feed_filter_modal" => self.flags.feed_filter_modal.clone(),
            "flags.onboarding" => self.flags.onboarding.clone(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Update a setting by dotted key (not saved)
    ///
    /// Empty values clear optional settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that fail to parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => self.quiet = parse(key, value)?,
            "user_id" => self.user_id = (!value.is_empty()).then(|| value.to_string()),
            "categories_file" => {
                self.categories_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "unblock_policy" => {
                self.unblock_policy = match value {
                    "anonymous-instant" => UnblockPolicy::AnonymousInstant,
                    "always-deferred" => UnblockPolicy::AlwaysDeferred,
                    "always-instant" => UnblockPolicy::AlwaysInstant,
                    _ => {
                        return Err(ConfigError::Message(format!(
                            "Invalid value for unblock_policy: '{value}'. Use anonymous-instant, always-deferred or always-instant"
                        )));
                    }
                };
            }
            "undo_window_secs" => {
                let max = MAX_UNDO_WINDOW.num_seconds().unsigned_abs();
                self.undo_window_secs = parse_at_most(key, value, max)?;
            }
            "log_filter" => self.log_filter = value.to_string(),
            "search.cache_capacity" => self.search.cache_capacity = parse(key, value)?,
            "search.cache_ttl_secs" => {
                self.search.cache_ttl_secs = parse_at_most(key, value, MAX_TTL.as_secs())?;
            }
            "search.result_limit" => self.search.result_limit = parse(key, value)?,
            "flags.personalized_feed" => self.flags.personalized_feed = parse(key, value)?,
            "flags.feed_filter_modal" => self.flags.feed_filter_modal = value.to_string(),
            "flags.onboarding" => self.flags.onboarding = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

const fn policy_name(policy: UnblockPolicy) -> &'static str {
    match policy {
        UnblockPolicy::AnonymousInstant => "anonymous-instant",
        UnblockPolicy::AlwaysDeferred => "always-deferred",
        UnblockPolicy::AlwaysInstant => "always-instant",
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value for {key}: '{value}'")))
}

fn parse_at_most(key: &str, value: &str, max: u64) -> Result<u64, ConfigError> {
    let parsed: u64 = parse(key, value)?;
    if parsed > max {
        return Err(ConfigError::Message(format!(
            "Invalid value for {key}: '{value}' exceeds the maximum of {max}"
        )));
    }
    Ok(parsed)
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
