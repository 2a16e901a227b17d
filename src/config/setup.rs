//! First-run prompts

use super::AppConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

fn prompt_text(prompt: &str, default: Option<String>) -> Result<String, ConfigError> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    input = match default {
        Some(value) => input.default(value),
        None => input.allow_empty(true),
    };
    input
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read {prompt}: {e}")))
}

/// Ask for the database location and the signed-in user, then save
///
/// A blank user id keeps the CLI anonymous.
///
/// # Errors
///
/// Returns `ConfigError` when the data directory is unknown, a prompt fails
/// or the file cannot be written.
pub fn first_time_setup() -> Result<AppConfig, ConfigError> {
    println!("No feedtags configuration found, creating one.\n");

    let default_path = AppConfig::default_database_path("default")?;
    let db_path = prompt_text("Database location", Some(default_path.display().to_string()))?;
    let user_id = prompt_text("User id (blank for anonymous)", None)?;

    let mut config = AppConfig::default();
    config.databases.insert("default".to_string(), PathBuf::from(db_path));
    config.default_database = Some("default".to_string());
    let user_id = user_id.trim();
    if !user_id.is_empty() {
        config.user_id = Some(user_id.to_string());
    }

    config.save()?;
    println!("\nSaved {}", AppConfig::config_path()?.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_signature() {
        let _: fn() -> Result<AppConfig, ConfigError> = first_time_setup;
    }
}
