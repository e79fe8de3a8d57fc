use qb_query::counts::count_questions;
use qb_query::detail::summarize_categories;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CategoryCommands;
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `qbank category`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List => list(ctx, flags),
        CategoryCommands::Create { name } => {
            let category = ctx.provider.add_category(name).await?;
            output(&category, flags.format)
        }
        CategoryCommands::Rename { id, name } => {
            let category = ctx.provider.rename_category(id, name).await?;
            output(&category, flags.format)
        }
        CategoryCommands::Delete { id } => delete(id, ctx, flags).await,
    }
}

fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider = &ctx.provider;
    // Pending counts mean the batched tally failed; fall back to the loaded rows.
    let counts = provider.counts().resolved().cloned().unwrap_or_else(|| {
        count_questions(
            provider.categories(),
            provider.subcategories(),
            provider.questions(),
        )
    });
    let summary = summarize_categories(provider.categories(), provider.subcategories(), &counts);
    output(&summary, flags.format)
}

/// Reports the category plus its subcategories as deleted records.
async fn delete(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let subcategories = ctx.provider.delete_category(id).await?;
    output(
        &Deleted {
            entity: "category",
            id,
            deleted: subcategories + 1,
        },
        flags.format,
    )
}
