mod quiz;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudyCommands;
use crate::context::AppContext;

/// Handle `qbank study`.
pub async fn handle(
    action: &StudyCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudyCommands::Quiz {
            category,
            mastery,
            difficulty,
            limit,
            record,
        } => {
            let params = quiz::Params {
                category: category.clone(),
                mastery: mastery.clone(),
                difficulty: *difficulty,
                limit: *limit,
                record: *record,
            };
            quiz::run(&params, ctx, flags).await
        }
    }
}
