use qb_query::detail::question_detail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let provider = &ctx.provider;
    let question = provider.question(id)?;
    let detail = question_detail(
        question,
        provider.questions(),
        provider.categories(),
        provider.subcategories(),
    );
    output(&detail, flags.format)
}
