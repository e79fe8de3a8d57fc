mod create;
mod list;
mod update;

use qb_core::enums::JobStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JobCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{Deleted, output};

/// Handle `qbank job`.
pub async fn handle(
    action: &JobCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JobCommands::List {
            sort,
            direction,
            status,
        } => list::run(
            sort.as_deref(),
            direction.as_deref(),
            status.as_deref(),
            ctx,
            flags,
        ),
        JobCommands::Get { id } => output(ctx.provider.job(id)?, flags.format),
        JobCommands::Create {
            company,
            position,
            location,
            applied,
            status,
            interview_date,
            url,
            notes,
            contact,
            email,
        } => {
            let params = create::Params {
                company: company.clone(),
                position: position.clone(),
                location: location.clone(),
                applied: applied.clone(),
                status: status.clone(),
                interview_date: interview_date.clone(),
                url: url.clone(),
                notes: notes.clone(),
                contact: contact.clone(),
                email: email.clone(),
            };
            create::run(params, ctx, flags).await
        }
        JobCommands::Update {
            id,
            company,
            position,
            location,
            applied,
            status,
            interview_date,
            url,
            notes,
            contact,
            email,
        } => {
            let params = update::Params {
                id: id.clone(),
                company: company.clone(),
                position: position.clone(),
                location: location.clone(),
                applied: applied.clone(),
                status: status.clone(),
                interview_date: interview_date.clone(),
                url: url.clone(),
                notes: notes.clone(),
                contact: contact.clone(),
                email: email.clone(),
            };
            update::run(params, ctx, flags).await
        }
        JobCommands::Status { id, status } => {
            let status = parse_enum::<JobStatus>(status, "status")?;
            let job = ctx.provider.set_job_status(id, status).await?;
            output(&job, flags.format)
        }
        JobCommands::Delete { id } => {
            ctx.provider.delete_job(id).await?;
            output(
                &Deleted {
                    entity: "job",
                    id,
                    deleted: 1,
                },
                flags.format,
            )
        }
    }
}
