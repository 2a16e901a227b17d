//! Config command - read and change configuration values

use crate::cli::ConfigCommands;
use crate::config::AppConfig;
use crate::ui::OutputWriter;
use crate::{FeedTagsError, Result};
use std::path::Path;

/// Run a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error for malformed `KEY=VALUE` input, unknown keys, invalid
/// values, or if the configuration cannot be saved
pub fn execute(
    config: &mut AppConfig,
    path: &Path,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                FeedTagsError::InvalidInput(format!(
                    "Invalid format: '{setting}'. Use KEY=VALUE (e.g., quiet=true)"
                ))
            })?;
            let key = key.trim();
            let value = value.trim();
            config.set(key, value)?;
            config.save_to(path)?;
            output.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            output.write(&config.get(key)?);
        }
        ConfigCommands::Path => {
            output.write(&path.display().to_string());
        }
    }
    Ok(())
}
