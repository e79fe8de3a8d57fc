//! Input checks applied before a write reaches the store.
//!
//! The store accepts whatever it is given; these are the only rules.

use qb_core::entities::{NewJob, NewQuestion};
use qb_core::enums::JobStatus;
use qb_core::errors::CoreError;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Trim tags, drop empty ones, and drop repeats, keeping first occurrence order.
#[must_use]
pub fn normalize_tags<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(raw.len());
    for tag in raw {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Reject a difficulty outside `1..=5`.
pub fn check_difficulty(difficulty: u8) -> Result<(), CoreError> {
    if (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {difficulty}"
        )))
    }
}

fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Required fields and difficulty range of a new question.
pub fn validate_new_question(question: &NewQuestion) -> Result<(), CoreError> {
    require("title", &question.title)?;
    require("category", &question.category)?;
    require("question", &question.question)?;
    require("answer", &question.answer)?;
    check_difficulty(question.difficulty)
}

/// An interview-stage application must carry its interview date.
pub fn check_interview_date(
    status: JobStatus,
    interview_date: Option<chrono::NaiveDate>,
) -> Result<(), CoreError> {
    if status.requires_interview_date() && interview_date.is_none() {
        return Err(CoreError::Validation(
            "interview date is required when status is interview".to_string(),
        ));
    }
    Ok(())
}

/// Required fields of a new job application.
pub fn validate_new_job(job: &NewJob) -> Result<(), CoreError> {
    require("company", &job.company)?;
    require("position", &job.position)?;
    check_interview_date(job.status, job.interview_date)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::test_support::day;

    fn new_question() -> NewQuestion {
        NewQuestion {
            title: "What is a closure?".into(),
            category: "cat-1".into(),
            sub_category: "sub-1".into(),
            difficulty: 2,
            question: "Explain closures.".into(),
            answer: "A function plus its environment.".into(),
            ..NewQuestion::default()
        }
    }

    fn new_job(status: JobStatus) -> NewJob {
        NewJob {
            company: "Acme".into(),
            position: "Engineer".into(),
            location: None,
            application_date: day(2024, 1, 5),
            status,
            interview_date: None,
            job_url: None,
            notes: None,
            contact_person: None,
            contact_email: None,
        }
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let tags = normalize_tags(&[" rust ", "", "async", "rust", "   ", "Rust"]);
        assert_eq!(tags, vec!["rust", "async", "Rust"]);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(5, true)]
    #[case(6, false)]
    fn difficulty_bounds(#[case] difficulty: u8, #[case] ok: bool) {
        assert_eq!(check_difficulty(difficulty).is_ok(), ok);
    }

    #[test]
    fn complete_question_passes() {
        assert!(validate_new_question(&new_question()).is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut q = new_question();
        q.title = "   ".into();
        let err = validate_new_question(&q).unwrap_err();
        assert!(err.to_string().contains("title is required"));
    }

    #[test]
    fn interview_without_date_is_rejected() {
        let err = validate_new_job(&new_job(JobStatus::Interview)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        let mut scheduled = new_job(JobStatus::Interview);
        scheduled.interview_date = Some(day(2024, 2, 1));
        assert!(validate_new_job(&scheduled).is_ok());
    }

    #[test]
    fn other_statuses_need_no_date() {
        for status in JobStatus::PIPELINE {
            if status != JobStatus::Interview {
                assert!(validate_new_job(&new_job(status)).is_ok());
            }
        }
    }
}
