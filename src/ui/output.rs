//! Message output
//!
//! Commands never print directly; they report through [`OutputWriter`] so the
//! same code drives the terminal and the captured writer used in tests.

use colored::Colorize;

/// Sink for user-facing messages
///
/// `write` carries command results (tag lists, status, config values). The
/// other methods carry feedback about what a command did.
///
/// ```no_run
/// use feedtags::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::quiet(false);
/// output.write("rust");
/// output.success("Followed rust");
/// output.error("Unknown tag");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Result line, always shown
    fn write(&self, message: &str);

    /// Failure, always shown
    fn error(&self, message: &str);

    fn success(&self, message: &str);

    fn warning(&self, message: &str);

    /// Secondary detail, rendered dimmed
    fn info(&self, message: &str);
}

/// Terminal writer
///
/// Errors go to stderr. With `quiet` set, only results and errors are shown,
/// which keeps `feedtags status` and `config get` usable in scripts.
#[derive(Debug, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self::quiet(false)
    }

    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    fn feedback(&self, line: impl std::fmt::Display) {
        if !self.quiet {
            println!("{line}");
        }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }

    fn success(&self, message: &str) {
        self.feedback(format!("{} {message}", "✓".green()));
    }

    fn warning(&self, message: &str) {
        self.feedback(format!("{} {}", "!".yellow().bold(), message.yellow()));
    }

    fn info(&self, message: &str) {
        self.feedback(message.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_flag() {
        assert!(!StdoutWriter::new().quiet);
        assert!(!StdoutWriter::default().quiet);
        assert!(StdoutWriter::quiet(true).quiet);
    }
}
