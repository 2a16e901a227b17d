//! Status command - followed and blocked tags

use super::CommandContext;
use crate::Result;
use crate::filter::UnblockPolicy;
use crate::flags::AuthState;
use serde::Serialize;

/// Snapshot printed by `status`
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub user: Option<String>,
    pub followed: Vec<String>,
    pub blocked: Vec<String>,
    pub unblock_policy: UnblockPolicy,
    pub feed_filter_variant: String,
}

impl StatusReport {
    /// # Errors
    /// Returns an error if the feed settings cannot be read
    pub fn collect(ctx: &CommandContext<'_>) -> Result<Self> {
        let settings = ctx.feed.feed_settings()?;
        let user = match &ctx.auth {
            AuthState::Authenticated { user_id } => Some(user_id.clone()),
            AuthState::Anonymous => None,
        };
        Ok(Self {
            user,
            followed: settings.include_tags.into_iter().collect(),
            blocked: settings.blocked_tags.into_iter().collect(),
            unblock_policy: ctx.config.unblock_policy,
            feed_filter_variant: ctx.config.flags.feed_filter_variant().to_string(),
        })
    }
}

fn tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}

/// # Errors
/// Returns an error if the store cannot be read or JSON encoding fails
pub fn execute(ctx: &CommandContext<'_>, json: bool) -> Result<()> {
    let report = StatusReport::collect(ctx)?;

    if json {
        ctx.output.write(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    ctx.output
        .info(&format!("User: {}", report.user.as_deref().unwrap_or("anonymous")));
    ctx.output.write(&format!(
        "Following ({}): {}",
        report.followed.len(),
        tag_list(&report.followed)
    ));
    ctx.output.write(&format!(
        "Blocked ({}): {}",
        report.blocked.len(),
        tag_list(&report.blocked)
    ));
    Ok(())
}
