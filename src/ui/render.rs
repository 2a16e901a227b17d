//! Plain-text rendering of view models
//!
//! Each `*_lines` function is pure and returns the lines to print; `print`
//! sends them to an [`OutputWriter`].

use super::output::OutputWriter;
use crate::filter::{FilterMode, FilterViewModel, MenuAction, MenuView, TagRow};
use crate::flags::Spacing;
use crate::onboarding::{FooterAlign, IntroModal};
use crate::preferences::{PanelSection, SectionContent};
use colored::Colorize;

const SEARCH_PLACEHOLDER: &str = "Search";

const fn blank_lines(spacing: Spacing) -> usize {
    match spacing {
        Spacing::None => 0,
        Spacing::Tight | Spacing::Default => 1,
        Spacing::Loose => 2,
    }
}

fn push_blank(lines: &mut Vec<String>, count: usize) {
    lines.extend(std::iter::repeat_n(String::new(), count));
}

/// One tag row with its follow/block marker
#[must_use]
pub fn row_line(row: &TagRow) -> String {
    if row.is_blocked {
        format!("{} {} {}", "⊘".red(), row.tag, "(blocked)".red())
    } else if row.is_followed {
        format!("{} {} {}", "✓".green(), row.tag, "(following)".green())
    } else {
        format!("{} {}", "+".dimmed(), row.tag)
    }
}

fn search_line(view: &FilterViewModel) -> String {
    let field = if view.query.is_empty() {
        SEARCH_PLACEHOLDER.dimmed().to_string()
    } else {
        view.query.bold().to_string()
    };
    if view.pending {
        format!("🔍 {field} {}", "(searching...)".dimmed())
    } else {
        format!("🔍 {field}")
    }
}

/// Lines for the tag filter panel
#[must_use]
pub fn filter_lines(view: &FilterViewModel) -> Vec<String> {
    let layout = view.header.layout;
    let mut lines = Vec::new();

    if let Some(headline) = view.header.headline {
        lines.push(headline.bold().to_string());
        push_blank(&mut lines, blank_lines(layout.paragraph_spacing));
    }

    if layout.reversed_header {
        lines.push(view.header.intro.to_string());
        push_blank(&mut lines, blank_lines(layout.search_spacing));
        lines.push(search_line(view));
    } else {
        lines.push(search_line(view));
        push_blank(&mut lines, blank_lines(layout.search_spacing));
        lines.push(view.header.intro.to_string());
    }
    lines.push(String::new());

    match view.mode {
        FilterMode::Search => {
            lines.extend(view.items.iter().map(|row| format!("  {}", row_line(row))));
        }
        FilterMode::Browse => {
            for group in &view.groups {
                let title = match &group.emoji {
                    Some(emoji) => format!("{emoji} {}", group.title),
                    None => group.title.clone(),
                };
                lines.push(title.bold().to_string());
                lines.extend(group.rows.iter().map(|row| format!("  {}", row_line(row))));
            }
        }
    }

    if let Some(message) = view.empty_message {
        lines.push(message.dimmed().to_string());
    }

    if let MenuView::Open { tag, .. } = &view.menu {
        let action = match view.menu.action() {
            Some(MenuAction::Block) => "Block",
            Some(MenuAction::Unblock) => "Unblock",
            None => "-",
        };
        lines.push(format!("Options for '{tag}': [{action}]"));
    }

    lines
}

/// Lines for the settings panel
#[must_use]
pub fn settings_lines(sections: &[PanelSection]) -> Vec<String> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(section.title.bold().to_string());
        match &section.content {
            SectionContent::LayoutSwitch { compact } => {
                let (cards, list) = if *compact { (" ", "x") } else { ("x", " ") };
                lines.push(format!("  [{cards}] Cards  [{list}] List"));
            }
            SectionContent::Radio(options) => {
                for option in options {
                    let mark = if option.selected { "(•)" } else { "( )" };
                    lines.push(format!("  {mark} {}", option.label));
                }
            }
            SectionContent::Switches(rows) => {
                for row in rows {
                    let mark = if row.checked { "[x]" } else { "[ ]" };
                    lines.push(format!("  {mark} {} {}", row.label, format!("({})", row.toggle).dimmed()));
                }
            }
        }
    }
    lines
}

/// Lines for the onboarding intro modal
#[must_use]
pub fn intro_lines(modal: &IntroModal) -> Vec<String> {
    let mut lines = vec![modal.title.bold().to_string(), modal.explainer.clone(), String::new()];

    let width = modal
        .cloud
        .iter()
        .flatten()
        .filter_map(|cell| cell.tag)
        .map(str::len)
        .max()
        .unwrap_or(0);
    for row in &modal.cloud {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| format!("{:^width$}", cell.tag.unwrap_or("")))
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines.push(String::new());

    let footer = &modal.footer;
    let primary = format!("[ {} ]", footer.primary_label);
    let buttons = if footer.show_skip {
        format!("[ Skip ]  {primary}")
    } else {
        primary
    };
    let indent = match footer.align {
        FooterAlign::Start => 0,
        FooterAlign::Center => 8,
        FooterAlign::SpaceBetween => 2,
    };
    lines.push(format!("{}{buttons}", " ".repeat(indent)));
    lines
}

/// Write lines as normal output
pub fn print(output: &dyn OutputWriter, lines: &[String]) {
    for line in lines {
        output.write(line);
    }
}
