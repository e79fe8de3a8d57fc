//! Job-application ordering and the active/archived split.

use std::cmp::Ordering;

use qb_core::entities::Job;
use qb_core::enums::{JobSortBy, SortDirection};
use qb_core::responses::JobBoard;
use serde::{Deserialize, Serialize};

use crate::compare::locale_cmp;

/// Sort configuration for job lists. Defaults to newest application first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSort {
    pub by: JobSortBy,
    pub direction: SortDirection,
}

impl JobSort {
    #[must_use]
    pub const fn new(by: JobSortBy, direction: SortDirection) -> Self {
        Self { by, direction }
    }

    #[must_use]
    pub fn compare(&self, a: &Job, b: &Job) -> Ordering {
        let ascending = match self.by {
            JobSortBy::Date => a.application_date.cmp(&b.application_date),
            JobSortBy::Company => locale_cmp(&a.company, &b.company),
            JobSortBy::Status => a.status.rank().cmp(&b.status.rank()),
        };
        self.direction.apply(ascending)
    }
}

/// A sorted copy of `jobs`. Stable, so ties keep input order.
#[must_use]
pub fn sort_jobs(jobs: &[Job], sort: JobSort) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| sort.compare(a, b));
    sorted
}

/// Split into active and archived lists, preserving order within each.
#[must_use]
pub fn partition_jobs(jobs: Vec<Job>) -> JobBoard {
    let (active, archived) = jobs.into_iter().partition(|job| job.status.is_active());
    JobBoard { active, archived }
}

/// Sort, then partition.
#[must_use]
pub fn job_board(jobs: &[Job], sort: JobSort) -> JobBoard {
    partition_jobs(sort_jobs(jobs, sort))
}
