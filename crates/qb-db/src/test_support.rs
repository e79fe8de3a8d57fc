//! Shared test utilities for qb-db unit tests.

pub(crate) mod helpers {
    use chrono::NaiveDate;
    use qb_core::entities::{NewJob, NewQuestion};
    use qb_core::enums::JobStatus;

    use crate::QbDb;
    use crate::service::QbService;

    /// Create an in-memory `QbService`.
    pub async fn test_service() -> QbService {
        let db = QbDb::open_local(crate::IN_MEMORY).await.unwrap();
        QbService::from_db(db)
    }

    pub fn new_question(title: &str, category: &str, sub_category: &str) -> NewQuestion {
        NewQuestion {
            title: title.to_string(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            difficulty: 3,
            question: format!("{title}?"),
            answer: "Because.".to_string(),
            tags: vec!["general".to_string()],
            related_questions: Vec::new(),
        }
    }

    pub fn new_job(company: &str, status: JobStatus) -> NewJob {
        NewJob {
            company: company.to_string(),
            position: "Backend Engineer".to_string(),
            location: Some("Remote".to_string()),
            application_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            status,
            interview_date: None,
            job_url: None,
            notes: None,
            contact_person: None,
            contact_email: None,
        }
    }
}
