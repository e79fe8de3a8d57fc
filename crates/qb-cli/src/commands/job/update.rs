use qb_core::enums::JobStatus;
use qb_db::updates::job::{JobUpdate, JobUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{clearable, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub applied: Option<String>,
    pub status: Option<String>,
    pub interview_date: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

pub async fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = params.id.clone();
    let update = build_update(params)?;
    let job = ctx.provider.update_job(&id, update).await?;
    output(&job, flags.format)
}

fn build_update(params: Params) -> anyhow::Result<JobUpdate> {
    let mut builder = JobUpdateBuilder::new();
    if let Some(company) = params.company {
        builder = builder.company(company);
    }
    if let Some(position) = params.position {
        builder = builder.position(position);
    }
    if let Some(location) = params.location {
        builder = builder.location(clearable(&location));
    }
    if let Some(applied) = params.applied.as_deref() {
        builder = builder.application_date(parse_date(applied, "applied")?);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum::<JobStatus>(status, "status")?);
    }
    if let Some(raw) = params.interview_date.as_deref() {
        let date = clearable(raw)
            .map(|raw| parse_date(&raw, "interview date"))
            .transpose()?;
        builder = builder.interview_date(date);
    }
    if let Some(url) = params.url {
        builder = builder.job_url(clearable(&url));
    }
    if let Some(notes) = params.notes {
        builder = builder.notes(clearable(&notes));
    }
    if let Some(contact) = params.contact {
        builder = builder.contact_person(clearable(&contact));
    }
    if let Some(email) = params.email {
        builder = builder.contact_email(clearable(&email));
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("At least one field to change must be provided");
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::{Params, build_update};

    fn params() -> Params {
        Params {
            id: String::from("job-1"),
            company: None,
            position: None,
            location: None,
            applied: None,
            status: None,
            interview_date: None,
            url: None,
            notes: None,
            contact: None,
            email: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(build_update(params()).is_err());
    }

    #[test]
    fn blank_value_clears_the_field() {
        let update = build_update(Params {
            notes: Some(String::new()),
            interview_date: Some(String::new()),
            ..params()
        })
        .expect("update");
        assert_eq!(update.notes, Some(None));
        assert_eq!(update.interview_date, Some(None));
    }

    #[test]
    fn invalid_status_is_rejected() {
        let result = build_update(Params {
            status: Some(String::from("hired")),
            ..params()
        });
        assert!(result.is_err());
    }
}
