//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Show the tag categories with follow/block state (default)
//! - **search**: Search tags by name
//! - **follow / unfollow / block / unblock**: Change the feed's tag sets
//! - **status**: Print the followed and blocked tags
//! - **prefs**: Show or change the settings panel
//! - **onboarding**: Walk through the "create my feed" intro
//! - **config**: Read or change configuration values
//!
//! ```
//! use clap::Parser;
//! use feedtags::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["feedtags", "-q", "block", "php", "java"]);
//! assert!(cli.quiet);
//! assert!(matches!(cli.get_command(), Commands::Block { .. }));
//! ```

use crate::preferences::{Density, PreferenceToggle, ThemeMode};
use clap::{Parser, Subcommand};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., unblock_policy=always-deferred)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., search.result_limit)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,
}

/// Settings panel subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PrefsCommands {
    /// Show the settings panel
    Show {
        /// Render the browser-extension variant of the panel
        #[arg(long = "extension")]
        extension: bool,
    },

    /// Flip a switch (e.g. new-tab, hide-read)
    Toggle {
        #[arg(value_name = "NAME")]
        toggle: PreferenceToggle,
    },

    /// Choose the theme (dark, light, auto)
    Theme {
        #[arg(value_name = "THEME")]
        theme: ThemeMode,
    },

    /// Choose the density (eco, roomy, cozy)
    Density {
        #[arg(value_name = "DENSITY")]
        density: Density,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "feedtags")]
#[command(about = "Choose the tags that shape your feed", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Act as a signed-out user regardless of configuration
    #[arg(long = "anonymous", global = true)]
    pub anonymous: bool,

    /// Database to use (overrides default)
    #[arg(long = "db", value_name = "NAME", global = true)]
    pub db: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show tag categories (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Search tags by name
    #[command(visible_alias = "s")]
    Search {
        #[arg(value_name = "QUERY")]
        query: String,

        /// Open the options menu for a tag in the results
        #[arg(long = "menu", value_name = "TAG")]
        menu: Option<String>,
    },

    /// Follow tags
    #[command(visible_alias = "f")]
    Follow {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Stop following tags
    Unfollow {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Block tags
    Block {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Unblock a tag, offering an undo window when required
    Unblock {
        #[arg(value_name = "TAG")]
        tag: String,

        /// Apply without offering undo
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Print followed and blocked tags
    Status {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Settings panel
    #[command(subcommand)]
    Prefs(PrefsCommands),

    /// Show the "create my feed" intro
    Onboarding,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["feedtags"]);
        assert!(matches!(cli.get_command(), Commands::Browse));
    }

    #[test]
    fn test_follow_requires_tags() {
        assert!(Cli::try_parse_from(["feedtags", "follow"]).is_err());
        let cli = Cli::parse_from(["feedtags", "follow", "rust", "go"]);
        match cli.get_command() {
            Commands::Follow { tags } => assert_eq!(tags, vec!["rust", "go"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unblock_yes_flag() {
        let cli = Cli::parse_from(["feedtags", "unblock", "php", "--yes"]);
        assert!(matches!(cli.get_command(), Commands::Unblock { yes: true, .. }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["feedtags", "status", "--json", "--anonymous", "--db", "work"]);
        assert!(cli.anonymous);
        assert_eq!(cli.db.as_deref(), Some("work"));
        assert!(matches!(cli.get_command(), Commands::Status { json: true }));
    }

    #[test]
    fn test_prefs_parse_values() {
        let cli = Cli::parse_from(["feedtags", "prefs", "toggle", "new-tab"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Prefs(PrefsCommands::Toggle {
                toggle: PreferenceToggle::OpenNewTab
            })
        ));

        let cli = Cli::parse_from(["feedtags", "prefs", "theme", "light"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Prefs(PrefsCommands::Theme { theme: ThemeMode::Light })
        ));

        assert!(Cli::try_parse_from(["feedtags", "prefs", "density", "huge"]).is_err());
    }

    #[test]
    fn test_config_set_takes_pair() {
        let cli = Cli::parse_from(["feedtags", "config", "set", "quiet=true"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Config(ConfigCommands::Set { setting }) if setting == "quiet=true"
        ));
    }
}
