use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Deleted, output};

pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.provider.delete_question(id).await?;
    output(
        &Deleted {
            entity: "question",
            id,
            deleted: 1,
        },
        flags.format,
    )
}
