//! Onboarding command - "create my feed" intro

use super::{CommandContext, browse};
use crate::Result;
use crate::onboarding::{CreateMyFeedFlow, FlowEffect, IntroModal};
use crate::ui::render;

const SKIP_LABEL: &str = "Skip";

/// Show the intro modal and continue into the tag filter
///
/// # Errors
/// Returns an error if the prompt fails or the tag filter cannot be shown
pub fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    let flags = &ctx.config.flags;
    let modal = IntroModal::new(flags);
    render::print(ctx.output, &render::intro_lines(&modal));

    let footer = &modal.footer;
    let proceed = if footer.show_skip {
        let choices = [footer.primary_label, SKIP_LABEL];
        ctx.input.prompt_select(&modal.title, &choices, 0)? == Some(0)
    } else {
        ctx.input.prompt_confirm(footer.primary_label, true)? == Some(true)
    };

    let mut flow = CreateMyFeedFlow::new(flags);
    if !proceed {
        flow.close();
        ctx.output.info("Skipped feed setup");
        return Ok(());
    }

    match flow.primary() {
        FlowEffect::OpenFilters => {
            ctx.output.info("Opening the tag filter");
            browse::execute(ctx)
        }
        FlowEffect::None => {
            // Inline filter modal; closing it ends the flow
            browse::execute(ctx)?;
            flow.close();
            Ok(())
        }
    }
}
