mod create;
mod delete;
mod get;
pub mod list;
mod master;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::context::AppContext;

/// Handle `qbank question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::List {
            category,
            difficulty,
            search,
            range,
            mastery,
            sort,
            direction,
            limit,
        } => {
            let params = list::Params {
                category: category.clone(),
                difficulty: *difficulty,
                search: search.clone(),
                range: range.clone(),
                mastery: mastery.clone(),
                sort: sort.clone(),
                direction: direction.clone(),
                limit: *limit,
            };
            list::run(&params, ctx, flags)
        }
        QuestionCommands::Get { id } => get::run(id, ctx, flags),
        QuestionCommands::Create {
            title,
            category,
            sub_category,
            difficulty,
            question,
            answer,
            tags,
            related,
        } => {
            let params = create::Params {
                title: title.clone(),
                category: category.clone(),
                sub_category: sub_category.clone(),
                difficulty: *difficulty,
                question: question.clone(),
                answer: answer.clone(),
                tags: tags.clone(),
                related: related.clone(),
            };
            create::run(params, ctx, flags).await
        }
        QuestionCommands::Update {
            id,
            title,
            category,
            sub_category,
            difficulty,
            question,
            answer,
            tags,
            clear_tags,
            related,
            clear_related,
            note,
        } => {
            let params = update::Params {
                id: id.clone(),
                title: title.clone(),
                category: category.clone(),
                sub_category: sub_category.clone(),
                difficulty: *difficulty,
                question: question.clone(),
                answer: answer.clone(),
                tags: tags.clone(),
                clear_tags: *clear_tags,
                related: related.clone(),
                clear_related: *clear_related,
                note: note.clone(),
            };
            update::run(params, ctx, flags).await
        }
        QuestionCommands::Delete { id } => delete::run(id, ctx, flags).await,
        QuestionCommands::Master { id } => master::run(id, ctx, flags).await,
    }
}
