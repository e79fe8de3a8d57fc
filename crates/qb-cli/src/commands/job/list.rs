use qb_core::entities::Job;
use qb_core::enums::{JobSortBy, JobStatus, SortDirection};
use qb_core::responses::JobBoard;
use qb_query::jobs::{JobSort, job_board};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    sort: Option<&str>,
    direction: Option<&str>,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let board = board(sort, direction, status, ctx)?;
    output(&board, flags.format)
}

fn board(
    sort: Option<&str>,
    direction: Option<&str>,
    status: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<JobBoard> {
    let by = match sort {
        Some(raw) => parse_enum::<JobSortBy>(raw, "sort")?,
        None => ctx.config.general.default_job_sort,
    };
    let direction = match direction {
        Some(raw) => parse_enum::<SortDirection>(raw, "direction")?,
        None => SortDirection::Desc,
    };
    let status = status
        .map(|raw| parse_enum::<JobStatus>(raw, "status"))
        .transpose()?;

    let jobs = ctx
        .provider
        .jobs()
        .iter()
        .filter(|job| status.is_none_or(|s| job.status == s))
        .cloned()
        .collect::<Vec<Job>>();
    Ok(job_board(&jobs, JobSort::new(by, direction)))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use qb_core::entities::NewJob;
    use qb_core::enums::JobStatus;

    use super::board;
    use crate::context::test_support::test_context;

    fn new_job(company: &str, status: JobStatus, day: u32) -> NewJob {
        NewJob {
            company: company.to_string(),
            position: "Engineer".to_string(),
            location: None,
            application_date: NaiveDate::from_ymd_opt(2024, 5, day).expect("valid date"),
            status,
            interview_date: (status == JobStatus::Interview)
                .then(|| NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")),
            job_url: None,
            notes: None,
            contact_person: None,
            contact_email: None,
        }
    }

    #[tokio::test]
    async fn board_splits_and_sorts_by_company() {
        let mut ctx = test_context().await;
        for (company, status, day) in [
            ("zeta", JobStatus::Applied, 1),
            ("Acme", JobStatus::Interview, 2),
            ("Bolt", JobStatus::Rejected, 3),
            ("acme", JobStatus::Interested, 4),
        ] {
            ctx.provider
                .add_job(new_job(company, status, day))
                .await
                .expect("job");
        }

        let board = board(Some("company"), Some("asc"), None, &ctx).expect("board");
        let active: Vec<&str> = board.active.iter().map(|j| j.company.as_str()).collect();
        let archived: Vec<&str> = board.archived.iter().map(|j| j.company.as_str()).collect();
        assert_eq!(active, vec!["acme", "Acme", "zeta"]);
        assert_eq!(archived, vec!["Bolt"]);
    }

    #[tokio::test]
    async fn status_filter_narrows_the_board() {
        let mut ctx = test_context().await;
        ctx.provider
            .add_job(new_job("Acme", JobStatus::Applied, 1))
            .await
            .expect("job");
        ctx.provider
            .add_job(new_job("Bolt", JobStatus::Offer, 2))
            .await
            .expect("job");

        let board = board(None, None, Some("offer"), &ctx).expect("board");
        assert!(board.active.is_empty());
        assert_eq!(board.archived.len(), 1);
        assert!(super::board(None, None, Some("hired"), &ctx).is_err());
    }
}
