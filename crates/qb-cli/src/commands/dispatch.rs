use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Question { action } => commands::question::handle(&action, ctx, flags).await,
        Commands::Category { action } => commands::category::handle(&action, ctx, flags).await,
        Commands::Subcategory { action } => {
            commands::subcategory::handle(&action, ctx, flags).await
        }
        Commands::Tag { action } => commands::tag::handle(&action, ctx, flags),
        Commands::Job { action } => commands::job::handle(&action, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags),
        Commands::Study { action } => commands::study::handle(&action, ctx, flags).await,
        Commands::Seed(args) => commands::seed::handle(&args, ctx, flags).await,
    }
}
