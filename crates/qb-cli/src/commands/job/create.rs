use chrono::Utc;
use qb_core::entities::NewJob;
use qb_core::enums::JobStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{clearable, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub applied: Option<String>,
    pub status: String,
    pub interview_date: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

pub async fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = new_job(params)?;
    let job = ctx.provider.add_job(new).await?;
    output(&job, flags.format)
}

fn new_job(params: Params) -> anyhow::Result<NewJob> {
    let application_date = match params.applied.as_deref() {
        Some(raw) => parse_date(raw, "applied")?,
        None => Utc::now().date_naive(),
    };
    let interview_date = params
        .interview_date
        .as_deref()
        .map(|raw| parse_date(raw, "interview date"))
        .transpose()?;

    Ok(NewJob {
        company: params.company,
        position: params.position,
        location: params.location.as_deref().and_then(clearable),
        application_date,
        status: parse_enum::<JobStatus>(&params.status, "status")?,
        interview_date,
        job_url: params.url.as_deref().and_then(clearable),
        notes: params.notes.as_deref().and_then(clearable),
        contact_person: params.contact.as_deref().and_then(clearable),
        contact_email: params.email.as_deref().and_then(clearable),
    })
}
