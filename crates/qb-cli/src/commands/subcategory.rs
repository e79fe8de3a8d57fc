use crate::cli::GlobalFlags;
use crate::cli::subcommands::SubcategoryCommands;
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `qbank subcategory`.
pub async fn handle(
    action: &SubcategoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SubcategoryCommands::Create { name, category } => {
            let sub = ctx.provider.add_subcategory(name, category).await?;
            output(&sub, flags.format)
        }
        SubcategoryCommands::Rename { id, name } => {
            let sub = ctx.provider.rename_subcategory(id, name).await?;
            output(&sub, flags.format)
        }
        SubcategoryCommands::Delete { id } => {
            ctx.provider.delete_subcategory(id).await?;
            output(
                &Deleted {
                    entity: "subcategory",
                    id,
                    deleted: 1,
                },
                flags.format,
            )
        }
    }
}
