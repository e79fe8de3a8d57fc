use qb_db::updates::question::{QuestionUpdate, QuestionUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub difficulty: Option<u8>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub tags: Vec<String>,
    pub clear_tags: bool,
    pub related: Vec<String>,
    pub clear_related: bool,
    pub note: Option<String>,
}

pub async fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = params.id.clone();
    let update = build_update(params)?;
    let question = ctx.provider.update_question(&id, update).await?;
    output(&question, flags.format)
}

fn build_update(params: Params) -> anyhow::Result<QuestionUpdate> {
    let mut builder = QuestionUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(category) = params.category {
        builder = builder.category(category);
    }
    if let Some(sub_category) = params.sub_category {
        builder = builder.sub_category(sub_category);
    }
    if let Some(difficulty) = params.difficulty {
        builder = builder.difficulty(difficulty);
    }
    if let Some(question) = params.question {
        builder = builder.question(question);
    }
    if let Some(answer) = params.answer {
        builder = builder.answer(answer);
    }
    // An empty list means "unchanged" unless the matching clear flag is set.
    if params.clear_tags || !params.tags.is_empty() {
        builder = builder.tags(params.tags);
    }
    if params.clear_related || !params.related.is_empty() {
        builder = builder.related_questions(params.related);
    }
    if let Some(note) = params.note {
        builder = builder.edit_note(note);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "At least one of --title, --category, --sub-category, --difficulty, --question, --answer, --tag, --clear-tags, --related, --clear-related, or --note must be provided"
        );
    }
    Ok(update)
}
