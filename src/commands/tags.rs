//! Follow, unfollow, block and unblock commands

use super::CommandContext;
use crate::filter::UnblockOutcome;
use crate::{FeedTagsError, Result};
use chrono::Utc;

fn require_tags(tags: &[String]) -> Result<()> {
    if tags.is_empty() {
        return Err(FeedTagsError::InvalidInput("No tags provided".into()));
    }
    Ok(())
}

/// # Errors
/// Returns an error if a tag is invalid or the store rejects the change
pub fn follow(ctx: &CommandContext<'_>, tags: &[String]) -> Result<()> {
    require_tags(tags)?;
    let mut controller = ctx.controller()?;
    for tag in tags {
        controller.on_follow(tag)?;
        ctx.output.success(&format!("Following {tag}"));
    }
    Ok(())
}

/// # Errors
/// Returns an error if a tag is invalid or the store rejects the change
pub fn unfollow(ctx: &CommandContext<'_>, tags: &[String]) -> Result<()> {
    require_tags(tags)?;
    let mut controller = ctx.controller()?;
    for tag in tags {
        controller.on_unfollow(tag)?;
        ctx.output.success(&format!("Stopped following {tag}"));
    }
    Ok(())
}

/// # Errors
/// Returns an error if a tag is invalid or the store rejects the change
pub fn block(ctx: &CommandContext<'_>, tags: &[String]) -> Result<()> {
    require_tags(tags)?;
    let mut controller = ctx.controller()?;
    for tag in tags {
        controller.on_block(tag)?;
        ctx.output.success(&format!("Blocked {tag}"));
    }
    Ok(())
}

/// Unblock a tag
///
/// When the unblock is deferred the user is offered "Undo?". Answering yes
/// inside the undo window keeps the tag blocked; anything else commits.
/// `skip_undo` commits a deferred unblock without asking.
///
/// # Errors
/// Returns an error if the store rejects the change or the prompt fails
pub fn unblock(ctx: &CommandContext<'_>, tag: &str, skip_undo: bool) -> Result<()> {
    if !ctx.feed.feed_settings()?.is_blocked(tag) {
        ctx.output.warning(&format!("{tag} is not blocked"));
        return Ok(());
    }

    let outcome = ctx.controller()?.on_unblock(tag)?;
    settle_unblock(ctx, outcome, skip_undo)
}

/// Finish an unblock started by the controller
///
/// # Errors
/// Returns an error if committing fails or the prompt fails
pub fn settle_unblock(ctx: &CommandContext<'_>, outcome: UnblockOutcome, skip_undo: bool) -> Result<()> {
    let pending = match outcome {
        UnblockOutcome::Applied => {
            ctx.output.success("Unblocked");
            return Ok(());
        }
        UnblockOutcome::Deferred(pending) => pending,
    };
    let tag = pending.tag().to_string();

    if !skip_undo {
        let seconds = pending.remaining(Utc::now()).num_seconds();
        ctx.output
            .info(&format!("{tag} will be unblocked ({seconds}s to undo)"));

        if ctx.input.prompt_confirm("Undo?", false)? == Some(true) {
            if pending.is_expired(Utc::now()) {
                ctx.output.warning("Undo window elapsed");
            } else {
                pending.cancel();
                ctx.output.info(&format!("{tag} stays blocked"));
                return Ok(());
            }
        }
    }

    pending.commit()?;
    ctx.output.success(&format!("Unblocked {tag}"));
    Ok(())
}
