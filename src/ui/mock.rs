//! Scripted input and captured output for command tests

use super::input::{Result, UserInput};
use super::output::OutputWriter;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Message level for captured output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Writer that keeps every message in memory
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// All message text joined by newlines
    #[must_use]
    pub fn text(&self) -> String {
        self.messages()
            .into_iter()
            .map(|(_, msg)| msg)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn contains(&self, level: MessageLevel, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, msg)| *l == level && msg.contains(needle))
    }

    fn push(&self, level: MessageLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

impl OutputWriter for BufferedWriter {
    fn write(&self, message: &str) {
        self.push(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.push(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.push(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.push(MessageLevel::Info, message);
    }
}

/// One canned answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Select(usize),
    Dismiss,
}

/// Input that replays canned answers in order
///
/// Panics when asked more questions than it was given answers, or when the
/// next answer does not fit the prompt kind.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: Mutex<VecDeque<Answer>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(answers: &[Answer]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> Answer {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted answer for prompt '{prompt}'"))
    }
}

impl UserInput for ScriptedInput {
    fn prompt_confirm(&self, prompt: &str, _default: bool) -> Result<Option<bool>> {
        match self.next(prompt) {
            Answer::Confirm(value) => Ok(Some(value)),
            Answer::Dismiss => Ok(None),
            Answer::Select(_) => panic!("expected a confirm answer for '{prompt}'"),
        }
    }

    fn prompt_select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<Option<usize>> {
        match self.next(prompt) {
            Answer::Select(index) => Ok(Some(index)),
            Answer::Dismiss => Ok(None),
            Answer::Confirm(_) => panic!("expected a select answer for '{prompt}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_writer_levels() {
        let writer = BufferedWriter::new();
        writer.success("Followed rust");
        writer.error("boom");

        let messages = writer.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (MessageLevel::Success, "Followed rust".to_string()));
        assert!(writer.contains(MessageLevel::Error, "boom"));
        assert!(!writer.contains(MessageLevel::Warning, "boom"));
    }

    #[test]
    fn test_scripted_input_replays_in_order() {
        let input = ScriptedInput::new(&[Answer::Confirm(true), Answer::Select(1), Answer::Dismiss]);
        assert_eq!(input.prompt_confirm("a", false).unwrap(), Some(true));
        assert_eq!(input.prompt_select("b", &["x", "y"], 0).unwrap(), Some(1));
        assert_eq!(input.prompt_confirm("c", false).unwrap(), None);
        assert_eq!(input.prompts(), vec!["a", "b", "c"]);
    }
}
