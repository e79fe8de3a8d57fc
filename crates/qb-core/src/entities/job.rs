use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;

/// A tracked job application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Job {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub application_date: NaiveDate,
    pub status: JobStatus,
    /// Only meaningful while `status` is `interview`; not enforced here.
    pub interview_date: Option<NaiveDate>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new job application.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewJob {
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub application_date: NaiveDate,
    pub status: JobStatus,
    pub interview_date: Option<NaiveDate>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
}
