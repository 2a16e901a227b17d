//! Search command - tag lookup with optional options menu

use super::CommandContext;
use super::tags::settle_unblock;
use crate::Result;
use crate::filter::MenuAction;
use crate::ui::render;

/// Search tags and print the results
///
/// With `menu_tag`, the options menu is opened for that tag and the user is
/// asked whether to apply the offered action.
///
/// # Errors
/// Returns an error if the store cannot be read, a mutation is rejected or
/// the prompt fails
pub fn execute(ctx: &CommandContext<'_>, query: &str, menu_tag: Option<&str>) -> Result<()> {
    let mut controller = ctx.controller()?;
    let provider = ctx.search_provider()?;
    controller.search_with(query, &provider);

    if let Some(tag) = menu_tag {
        controller.on_open_moderation_menu(tag)?;
    }

    let view = controller.view_model()?;
    render::print(ctx.output, &render::filter_lines(&view));

    let Some(action) = controller.menu().available_action() else {
        return Ok(());
    };
    let tag = controller.menu().selected().unwrap_or_default().to_string();
    let prompt = match action {
        MenuAction::Block => format!("Block {tag}?"),
        MenuAction::Unblock => format!("Unblock {tag}?"),
    };

    if ctx.input.prompt_confirm(&prompt, false)? != Some(true) {
        controller.on_close_moderation_menu();
        return Ok(());
    }

    match action {
        MenuAction::Block => {
            if let Some(tag) = controller.menu_block()? {
                ctx.output.success(&format!("Blocked {tag}"));
            }
        }
        MenuAction::Unblock => {
            if let Some(outcome) = controller.menu_unblock()? {
                settle_unblock(ctx, outcome, false)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::config::AppConfig;
    use crate::filter::UnblockPolicy;
    use crate::store::{FeedSettingsStore, MemoryStore};
    use crate::ui::mock::{Answer, BufferedWriter, MessageLevel, ScriptedInput};
    use std::sync::Arc;

    #[test]
    fn test_search_prints_matches() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let (output, input) = (BufferedWriter::new(), ScriptedInput::default());

        execute(&context(&store, &config, &output, &input), "kube", None).unwrap();

        let text = output.text();
        assert!(text.contains("kubernetes"));
        assert!(!text.contains("docker"));
        assert!(!text.contains("No matching tags."));
    }

    #[test]
    fn test_search_without_matches_shows_empty_state() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let (output, input) = (BufferedWriter::new(), ScriptedInput::default());

        execute(&context(&store, &config, &output, &input), "haskell", None).unwrap();
        assert!(output.text().contains("No matching tags."));
    }

    #[test]
    fn test_menu_block_confirmed() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let output = BufferedWriter::new();
        let input = ScriptedInput::new(&[Answer::Confirm(true)]);

        execute(&context(&store, &config, &output, &input), "go", Some("go")).unwrap();

        assert!(store.feed_settings().unwrap().is_blocked("go"));
        assert_eq!(input.prompts(), vec!["Block go?"]);
        assert!(output.contains(MessageLevel::Normal, "Options for 'go': [Block]"));
    }

    #[test]
    fn test_menu_declined_changes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let config = AppConfig::default();
        let output = BufferedWriter::new();
        let input = ScriptedInput::new(&[Answer::Confirm(false)]);

        execute(&context(&store, &config, &output, &input), "go", Some("go")).unwrap();
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_menu_unblock_follows_policy() {
        let store = Arc::new(MemoryStore::new());
        store.block_tags(&["php".to_string()]).unwrap();
        let config = AppConfig {
            unblock_policy: UnblockPolicy::AlwaysDeferred,
            undo_window_secs: 60,
            ..AppConfig::default()
        };
        let output = BufferedWriter::new();
        let input = ScriptedInput::new(&[Answer::Confirm(true), Answer::Confirm(true)]);

        execute(&context(&store, &config, &output, &input), "php", Some("php")).unwrap();

        assert_eq!(input.prompts(), vec!["Unblock php?", "Undo?"]);
        assert!(store.feed_settings().unwrap().is_blocked("php"));
    }
}
