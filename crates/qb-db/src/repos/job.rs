//! Job application repository.

use chrono::Utc;
use qb_core::entities::{Job, NewJob};
use qb_core::ids::PREFIX_JOB;

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, get_opt_string, parse_date, parse_datetime, parse_enum, parse_optional_date,
};
use crate::service::QbService;
use crate::updates::job::JobUpdate;

const SELECT_COLS: &str = "id, company, position, location, application_date, status, \
     interview_date, job_url, notes, contact_person, contact_email, created_at, updated_at";

fn row_to_job(row: &libsql::Row) -> Result<Job, DatabaseError> {
    Ok(Job {
        id: row.get(0)?,
        company: row.get(1)?,
        position: row.get(2)?,
        location: get_opt_string(row, 3)?,
        application_date: parse_date(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
        interview_date: parse_optional_date(get_opt_string(row, 6)?.as_deref())?,
        job_url: get_opt_string(row, 7)?,
        notes: get_opt_string(row, 8)?,
        contact_person: get_opt_string(row, 9)?,
        contact_email: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn opt_value(value: Option<&String>) -> libsql::Value {
    value.map_or(libsql::Value::Null, |s| s.clone().into())
}

impl QbService {
    pub async fn create_job(&self, new: &NewJob) -> Result<Job, DatabaseError> {
        let id = self.db().generate_id(PREFIX_JOB).await?;
        self.insert_job(&id, new).await
    }

    /// Insert with a caller-chosen id; `created_at` and `updated_at` are now.
    pub(crate) async fn insert_job(&self, id: &str, new: &NewJob) -> Result<Job, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT OR REPLACE INTO jobs ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.to_string()),
                    new.company.clone().into(),
                    new.position.clone().into(),
                    opt_value(new.location.as_ref()),
                    format_date(new.application_date).into(),
                    new.status.as_str().into(),
                    new.interview_date
                        .map_or(libsql::Value::Null, |d| format_date(d).into()),
                    opt_value(new.job_url.as_ref()),
                    opt_value(new.notes.as_ref()),
                    opt_value(new.contact_person.as_ref()),
                    opt_value(new.contact_email.as_ref()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(Job {
            id: id.to_string(),
            company: new.company.clone(),
            position: new.position.clone(),
            location: new.location.clone(),
            application_date: new.application_date,
            status: new.status,
            interview_date: new.interview_date,
            job_url: new.job_url.clone(),
            notes: new.notes.clone(),
            contact_person: new.contact_person.clone(),
            contact_email: new.contact_email.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_job(&self, id: &str) -> Result<Job, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM jobs WHERE id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("job", id))?;
        row_to_job(&row)
    }

    /// All applications, newest application first.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM jobs ORDER BY application_date DESC, rowid DESC"
                ),
                (),
            )
            .await?;

        let mut jobs = Vec::new();
        while let Some(row) = rows.next().await? {
            jobs.push(row_to_job(&row)?);
        }
        Ok(jobs)
    }

    /// Apply a partial update; `updated_at` is refreshed whenever anything changes.
    pub async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<Job, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref company) = update.company {
            sets.push(format!("company = ?{idx}"));
            params.push(company.clone().into());
            idx += 1;
        }
        if let Some(ref position) = update.position {
            sets.push(format!("position = ?{idx}"));
            params.push(position.clone().into());
            idx += 1;
        }
        if let Some(ref location) = update.location {
            sets.push(format!("location = ?{idx}"));
            params.push(opt_value(location.as_ref()));
            idx += 1;
        }
        if let Some(date) = update.application_date {
            sets.push(format!("application_date = ?{idx}"));
            params.push(format_date(date).into());
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(interview_date) = update.interview_date {
            sets.push(format!("interview_date = ?{idx}"));
            params.push(interview_date.map_or(libsql::Value::Null, |d| format_date(d).into()));
            idx += 1;
        }
        if let Some(ref url) = update.job_url {
            sets.push(format!("job_url = ?{idx}"));
            params.push(opt_value(url.as_ref()));
            idx += 1;
        }
        if let Some(ref notes) = update.notes {
            sets.push(format!("notes = ?{idx}"));
            params.push(opt_value(notes.as_ref()));
            idx += 1;
        }
        if let Some(ref person) = update.contact_person {
            sets.push(format!("contact_person = ?{idx}"));
            params.push(opt_value(person.as_ref()));
            idx += 1;
        }
        if let Some(ref email) = update.contact_email {
            sets.push(format!("contact_email = ?{idx}"));
            params.push(opt_value(email.as_ref()));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_job(id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(id.into());
        let sql = format!("UPDATE jobs SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("job", id));
        }

        self.get_job(id).await
    }

    pub async fn delete_job(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM jobs WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found("job", id));
        }
        Ok(())
    }
}
