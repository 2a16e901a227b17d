//! Prefs command - the settings panel

use super::CommandContext;
use crate::Result;
use crate::cli::PrefsCommands;
use crate::preferences::{PanelEnvironment, SettingsPanel, ToggleOutcome};
use crate::ui::render;

/// # Errors
/// Returns an error if preferences cannot be loaded or saved
pub fn execute(ctx: &CommandContext<'_>, command: &PrefsCommands) -> Result<()> {
    let mut panel = SettingsPanel::load(&*ctx.prefs)?;

    match command {
        PrefsCommands::Show { extension } => {
            let env = PanelEnvironment {
                is_extension: *extension,
                supports_color_scheme: true,
            };
            render::print(ctx.output, &render::settings_lines(&panel.sections(env)));
        }
        PrefsCommands::Toggle { toggle } => match panel.toggle(*toggle, &ctx.auth)? {
            ToggleOutcome::Toggled(value) => {
                let state = if toggle.displayed(panel.preferences()) { "on" } else { "off" };
                tracing::debug!(%toggle, value, "preference toggled");
                ctx.output.success(&format!("{} is now {state}", toggle.label()));
            }
            ToggleOutcome::LoginRequired { origin } => {
                tracing::info!(%toggle, origin, "login required");
                ctx.output
                    .warning(&format!("Sign in to change \"{}\"", toggle.label()));
            }
        },
        PrefsCommands::Theme { theme } => {
            panel.set_theme(*theme)?;
            ctx.output.success(&format!("Theme set to {}", theme.label()));
        }
        PrefsCommands::Density { density } => {
            panel.set_density(*density)?;
            ctx.output.success(&format!("Density set to {}", density.label()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::config::AppConfig;
    use crate::preferences::{Density, PreferenceToggle, ThemeMode};
    use crate::store::{MemoryStore, PreferenceStore};
    use crate::ui::mock::{BufferedWriter, MessageLevel, ScriptedInput};
    use std::sync::Arc;

    #[test]
    fn test_show_panel() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let (output, input) = (BufferedWriter::new(), ScriptedInput::default());
        let ctx = context(&store, &config, &output, &input);

        execute(&ctx, &PrefsCommands::Show { extension: false }).unwrap();
        assert!(!output.text().contains("Show custom shortcuts"));

        execute(&ctx, &PrefsCommands::Show { extension: true }).unwrap();
        assert!(output.text().contains("Show custom shortcuts"));
    }

    #[test]
    fn test_gated_toggle_for_anonymous() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let (output, input) = (BufferedWriter::new(), ScriptedInput::default());

        let command = PrefsCommands::Toggle {
            toggle: PreferenceToggle::ShowOnlyUnreadPosts,
        };
        execute(&context(&store, &config, &output, &input), &command).unwrap();

        assert!(output.contains(MessageLevel::Warning, "Sign in"));
        assert!(!store.load_preferences().unwrap().show_only_unread_posts);
    }

    #[test]
    fn test_toggle_theme_density() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig {
            user_id: Some("dev".to_string()),
            ..AppConfig::default()
        };
        let (output, input) = (BufferedWriter::new(), ScriptedInput::default());
        let ctx = context(&store, &config, &output, &input);

        execute(&ctx, &PrefsCommands::Toggle { toggle: PreferenceToggle::OptOutWeeklyGoal }).unwrap();
        execute(&ctx, &PrefsCommands::Theme { theme: ThemeMode::Light }).unwrap();
        execute(&ctx, &PrefsCommands::Density { density: Density::Cozy }).unwrap();

        let prefs = store.load_preferences().unwrap();
        assert!(prefs.opt_out_weekly_goal);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.spaciness, Density::Cozy);
        assert!(output.contains(MessageLevel::Success, "Show Weekly Goal widget is now off"));
    }
}
