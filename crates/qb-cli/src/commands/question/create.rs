use qb_core::entities::NewQuestion;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub category: String,
    pub sub_category: String,
    pub difficulty: u8,
    pub question: String,
    pub answer: String,
    pub tags: Vec<String>,
    pub related: Vec<String>,
}

pub async fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = NewQuestion {
        title: params.title,
        category: params.category,
        sub_category: params.sub_category,
        difficulty: params.difficulty,
        question: params.question,
        answer: params.answer,
        tags: params.tags,
        related_questions: params.related,
    };
    let question = ctx.provider.add_question(new).await?;
    output(&question, flags.format)
}
