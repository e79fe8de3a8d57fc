use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Handle `qbank tag`.
pub fn handle(action: &TagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TagCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let tags = ctx
                .provider
                .tags()
                .iter()
                .take(as_len(limit))
                .collect::<Vec<_>>();
            output(&tags, flags.format)
        }
    }
}
