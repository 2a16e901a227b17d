//! Browse command - tag categories with follow/block state

use super::CommandContext;
use crate::Result;
use crate::ui::render;

/// Print every category with its tags
///
/// # Errors
/// Returns an error if the controller cannot be built or the store cannot be read
pub fn execute(ctx: &CommandContext<'_>) -> Result<()> {
    let view = ctx.controller()?.view_model()?;
    render::print(ctx.output, &render::filter_lines(&view));
    Ok(())
}
