use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Flip the mastered flag; this also counts as a review.
pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let question = ctx.provider.toggle_mastered(id).await?;
    output(&question, flags.format)
}
