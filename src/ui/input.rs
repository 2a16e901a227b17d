//! User input abstraction layer
//!
//! Prompts go through [`UserInput`] so command code can be driven by scripted
//! answers in tests and by `dialoguer` on a terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use std::io;

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Prompt was given nothing to choose from
    #[error("Invalid prompt: {0}")]
    Invalid(String),
}

/// Interactive prompts
///
/// `Ok(None)` means the user dismissed the prompt (ESC).
///
/// ```no_run
/// use feedtags::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// if let Some(true) = input.prompt_confirm("Undo?", false).unwrap() {
///     println!("Undone");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Ask a yes/no question
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal cannot be read.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Pick one of `items`, returning its index
    ///
    /// # Errors
    ///
    /// Returns `InputError` if `items` is empty or the terminal cannot be read.
    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>>;
}

/// Terminal prompts backed by `dialoguer`
pub struct DialoguerInput {
    theme: ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(&self, prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>> {
        if items.is_empty() {
            return Err(InputError::Invalid(format!("'{prompt}' has no choices")));
        }

        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len() - 1))
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
