//! Job application update builder.

use chrono::NaiveDate;
use qb_core::enums::JobStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<Option<String>>,
}

impl JobUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.position.is_none()
            && self.location.is_none()
            && self.application_date.is_none()
            && self.status.is_none()
            && self.interview_date.is_none()
            && self.job_url.is_none()
            && self.notes.is_none()
            && self.contact_person.is_none()
            && self.contact_email.is_none()
    }
}

pub struct JobUpdateBuilder(JobUpdate);

impl JobUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(JobUpdate::default())
    }

    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.0.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.0.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub const fn application_date(mut self, date: NaiveDate) -> Self {
        self.0.application_date = Some(date);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: JobStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn interview_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.interview_date = Some(date);
        self
    }

    #[must_use]
    pub fn job_url(mut self, url: Option<String>) -> Self {
        self.0.job_url = Some(url);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn contact_person(mut self, person: Option<String>) -> Self {
        self.0.contact_person = Some(person);
        self
    }

    #[must_use]
    pub fn contact_email(mut self, email: Option<String>) -> Self {
        self.0.contact_email = Some(email);
        self
    }

    #[must_use]
    pub fn build(self) -> JobUpdate {
        self.0
    }
}

impl Default for JobUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
