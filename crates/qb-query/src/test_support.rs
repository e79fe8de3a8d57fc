//! Fixture builders shared by the unit tests in this crate.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use qb_core::entities::{Category, Job, Question, SubCategory};
use qb_core::enums::JobStatus;

/// Midnight UTC on the given calendar day.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        created_at: at(2024, 1, 1),
    }
}

pub fn subcategory(id: &str, name: &str, parent: &str) -> SubCategory {
    SubCategory {
        id: id.into(),
        name: name.into(),
        category_id: parent.into(),
        created_at: at(2024, 1, 1),
    }
}

pub fn job(id: &str, company: &str, status: JobStatus, applied: NaiveDate) -> Job {
    Job {
        id: id.into(),
        company: company.into(),
        position: "Engineer".into(),
        location: None,
        application_date: applied,
        status,
        interview_date: None,
        job_url: None,
        notes: None,
        contact_person: None,
        contact_email: None,
        created_at: at(2024, 1, 1),
        updated_at: at(2024, 1, 1),
    }
}

pub struct QuestionBuilder(Question);

impl QuestionBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self(Question {
            id: id.into(),
            title: title.into(),
            category: String::new(),
            sub_category: String::new(),
            difficulty: 1,
            question: String::new(),
            answer: String::new(),
            tags: Vec::new(),
            mastered: false,
            date_added: at(2024, 1, 1),
            last_reviewed: at(2024, 1, 1),
            related_questions: Vec::new(),
            edit_history: Vec::new(),
        })
    }

    pub fn category(mut self, category: &str, sub_category: &str) -> Self {
        self.0.category = category.into();
        self.0.sub_category = sub_category.into();
        self
    }

    pub const fn difficulty(mut self, difficulty: u8) -> Self {
        self.0.difficulty = difficulty;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.0.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub const fn mastered(mut self, mastered: bool) -> Self {
        self.0.mastered = mastered;
        self
    }

    pub const fn reviewed(mut self, when: DateTime<Utc>) -> Self {
        self.0.last_reviewed = when;
        self
    }

    pub const fn added(mut self, when: DateTime<Utc>) -> Self {
        self.0.date_added = when;
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.0.answer = answer.into();
        self
    }

    pub fn related(mut self, ids: &[&str]) -> Self {
        self.0.related_questions = ids.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn build(self) -> Question {
        self.0
    }
}
