//! Seed import: bulk-load a JSON document of categories, subcategories, tags,
//! questions, and jobs.
//!
//! Records may carry their own ids so that questions can reference seeded
//! taxonomy; missing ids are generated. Re-importing the same ids replaces
//! the earlier rows. The whole import runs in one transaction.

use std::path::Path;

use chrono::{DateTime, Utc};
use qb_core::entities::{Category, NewJob, Question, SubCategory};
use qb_core::ids::{PREFIX_CATEGORY, PREFIX_JOB, PREFIX_QUESTION, PREFIX_SUBCATEGORY};
use qb_core::responses::SeedReport;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::service::QbService;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub subcategories: Vec<SeedSubCategory>,
    #[serde(default)]
    pub tags: Vec<SeedTag>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
    #[serde(default)]
    pub jobs: Vec<SeedJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedCategory {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedSubCategory {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedTag {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedQuestion {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub difficulty: u8,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub mastered: bool,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub related_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub job: NewJob,
}

impl SeedFile {
    /// Read and parse a seed document from disk.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the file cannot be read and
    /// `DatabaseError::InvalidState` if it is not a valid seed document.
    pub fn from_path(path: &Path) -> Result<Self, DatabaseError> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            DatabaseError::InvalidState(format!("invalid seed file {}: {e}", path.display()))
        })
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl QbService {
    /// Import every record in `seed`. Nothing is written if any insert fails.
    pub async fn import_seed(&self, seed: &SeedFile) -> Result<SeedReport, DatabaseError> {
        self.db().conn().execute("BEGIN", ()).await?;
        match self.import_records(seed).await {
            Ok(report) => {
                self.db().conn().execute("COMMIT", ()).await?;
                tracing::info!(
                    questions = report.questions,
                    categories = report.categories,
                    jobs = report.jobs,
                    "seed imported"
                );
                Ok(report)
            }
            Err(error) => {
                if let Err(rollback) = self.db().conn().execute("ROLLBACK", ()).await {
                    tracing::warn!(%rollback, "seed rollback failed");
                }
                Err(error)
            }
        }
    }

    async fn id_or_new(&self, id: Option<&String>, prefix: &str) -> Result<String, DatabaseError> {
        match id {
            Some(id) => Ok(id.clone()),
            None => self.db().generate_id(prefix).await,
        }
    }

    async fn import_records(&self, seed: &SeedFile) -> Result<SeedReport, DatabaseError> {
        let now = Utc::now();

        for c in &seed.categories {
            let category = Category {
                id: self.id_or_new(c.id.as_ref(), PREFIX_CATEGORY).await?,
                name: c.name.clone(),
                created_at: now,
            };
            self.insert_category(&category).await?;
        }

        for s in &seed.subcategories {
            let sub = SubCategory {
                id: self.id_or_new(s.id.as_ref(), PREFIX_SUBCATEGORY).await?,
                name: s.name.clone(),
                category_id: s.category_id.clone(),
                created_at: now,
            };
            self.insert_subcategory(&sub).await?;
        }

        for t in &seed.tags {
            self.insert_tag(t.id.as_deref(), &t.name, t.count).await?;
        }

        for q in &seed.questions {
            let date_added = q.date_added.unwrap_or(now);
            let question = Question {
                id: self.id_or_new(q.id.as_ref(), PREFIX_QUESTION).await?,
                title: q.title.clone(),
                category: q.category.clone(),
                sub_category: q.sub_category.clone(),
                difficulty: q.difficulty,
                question: q.question.clone(),
                answer: q.answer.clone(),
                tags: q.tags.clone(),
                mastered: q.mastered,
                date_added,
                last_reviewed: q.last_reviewed.unwrap_or(date_added),
                related_questions: q.related_questions.clone(),
                edit_history: Vec::new(),
            };
            self.insert_question(&question).await?;
        }

        for j in &seed.jobs {
            let id = self.id_or_new(j.id.as_ref(), PREFIX_JOB).await?;
            self.insert_job(&id, &j.job).await?;
        }

        Ok(SeedReport {
            categories: count(seed.categories.len()),
            subcategories: count(seed.subcategories.len()),
            tags: count(seed.tags.len()),
            questions: count(seed.questions.len()),
            jobs: count(seed.jobs.len()),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use qb_core::enums::JobStatus;

    use super::*;
    use crate::test_support::helpers::test_service;

    const SEED: &str = r#"{
        "categories": [{"id": "frontend", "name": "Frontend"}, {"name": "Misc"}],
        "subcategories": [{"id": "react", "name": "React", "category_id": "frontend"}],
        "tags": [{"name": "hooks", "count": 7}],
        "questions": [{
            "id": "q-hooks",
            "title": "Explain React hooks",
            "category": "frontend",
            "sub_category": "react",
            "difficulty": 3,
            "tags": ["react", "hooks"],
            "mastered": true,
            "date_added": "2023-09-01T00:00:00Z",
            "related_questions": ["q-missing"]
        }],
        "jobs": [{
            "company": "Acme",
            "position": "Engineer",
            "location": null,
            "application_date": "2024-01-05",
            "status": "applied",
            "interview_date": null,
            "job_url": null,
            "notes": null,
            "contact_person": null,
            "contact_email": null
        }]
    }"#;

    #[tokio::test]
    async fn imports_every_collection() {
        let svc = test_service().await;
        let seed: SeedFile = serde_json::from_str(SEED).unwrap();

        let report = svc.import_seed(&seed).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                categories: 2,
                subcategories: 1,
                tags: 1,
                questions: 1,
                jobs: 1
            }
        );

        let q = svc.get_question("q-hooks").await.unwrap();
        assert!(q.mastered);
        assert_eq!(q.date_added, q.last_reviewed);
        assert_eq!(q.related_questions, vec!["q-missing"]);

        let categories = svc.list_categories().await.unwrap();
        assert_eq!(categories[0].id, "frontend");
        assert!(categories[1].id.starts_with("cat-"));

        assert_eq!(svc.list_tags().await.unwrap()[0].count, 7);
        assert_eq!(svc.list_jobs().await.unwrap()[0].status, JobStatus::Applied);
    }

    #[tokio::test]
    async fn reimport_replaces_rows() {
        let svc = test_service().await;
        let seed: SeedFile = serde_json::from_str(SEED).unwrap();
        svc.import_seed(&seed).await.unwrap();
        svc.import_seed(&seed).await.unwrap();
        assert_eq!(svc.list_questions().await.unwrap().len(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let seed: SeedFile = serde_json::from_str(r#"{"categories": [{"name": "Only"}]}"#).unwrap();
        assert_eq!(seed.categories.len(), 1);
        assert!(seed.questions.is_empty());
        assert!(seed.jobs.is_empty());
    }

    #[test]
    fn from_path_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            SeedFile::from_path(&path),
            Err(DatabaseError::InvalidState(_))
        ));
    }
}
