//! In-memory aggregate over a [`Store`].
//!
//! The provider loads questions, categories, subcategories, and tags once and
//! answers reads from memory. Every write goes to the store first; local
//! state is patched only after the store reports success, so a failed write
//! leaves the provider exactly as it was. Jobs are loaded separately with
//! [`Provider::load_jobs`].
//!
//! Derived counts are recomputed after each question or taxonomy write.

use chrono::Utc;
use qb_core::entities::{Category, Job, NewJob, NewQuestion, Question, SubCategory, Tag};
use qb_core::enums::JobStatus;
use qb_core::errors::CoreError;
use qb_query::counts::{CountState, QuestionCounts, count_questions};
use qb_query::detail::subcategories_of;
use qb_query::validate::{
    check_difficulty, check_interview_date, normalize_tags, validate_new_job,
    validate_new_question,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::DatabaseError;
use crate::store::Store;
use crate::updates::job::{JobUpdate, JobUpdateBuilder};
use crate::updates::question::{QuestionUpdate, QuestionUpdateBuilder};

/// Failure of a provider operation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Rejected before reaching the store, or the id is not loaded.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store round trip failed; nothing changed.
    #[error("store operation failed: {0}")]
    Store(#[from] DatabaseError),
}

impl ProviderError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Core(CoreError::NotFound { .. }) => true,
            Self::Store(e) => e.is_not_found(),
            Self::Core(_) => false,
        }
    }
}

/// Replace the element with the same id, or append it.
fn upsert<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str) {
    let id = id_of(&item).to_string();
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

fn required_name(kind: &str, name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{kind} name is required")));
    }
    Ok(name.to_string())
}

pub struct Provider<S> {
    store: S,
    questions: Vec<Question>,
    categories: Vec<Category>,
    subcategories: Vec<SubCategory>,
    tags: Vec<Tag>,
    jobs: Vec<Job>,
    counts: CountState,
}

impl<S: Store> Provider<S> {
    /// An empty provider. Call [`Self::load`] before reading.
    pub const fn new(store: S) -> Self {
        Self {
            store,
            questions: Vec::new(),
            categories: Vec::new(),
            subcategories: Vec::new(),
            tags: Vec::new(),
            jobs: Vec::new(),
            counts: CountState::Pending,
        }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Fetch all four collections and the counts, then swap them in
    /// together. If any fetch fails the previous snapshot is kept whole.
    pub async fn load(&mut self) -> Result<(), ProviderError> {
        let questions = self.store.list_questions().await?;
        let categories = self.store.list_categories().await?;
        let subcategories = self.store.list_subcategories().await?;
        let tags = self.store.list_tags().await?;
        let (by_category, by_subcategory) = self.store.question_tallies().await?;
        debug!(
            questions = questions.len(),
            categories = categories.len(),
            subcategories = subcategories.len(),
            tags = tags.len(),
            "loaded collections"
        );

        self.counts = CountState::Resolved(QuestionCounts::from_tallies(
            &categories,
            &subcategories,
            &by_category,
            &by_subcategory,
        ));
        self.questions = questions;
        self.categories = categories;
        self.subcategories = subcategories;
        self.tags = tags;
        Ok(())
    }

    /// Re-fetch everything, jobs included.
    pub async fn refresh(&mut self) -> Result<(), ProviderError> {
        self.load().await?;
        self.load_jobs().await
    }

    pub async fn load_jobs(&mut self) -> Result<(), ProviderError> {
        self.jobs = self.store.list_jobs().await?;
        debug!(jobs = self.jobs.len(), "loaded jobs");
        Ok(())
    }

    /// Fetch counts from the store in one grouped call. On failure the
    /// current counts stay as they were.
    pub async fn refresh_counts(&mut self) -> Result<(), ProviderError> {
        let (by_category, by_subcategory) = self.store.question_tallies().await?;
        self.counts = CountState::Resolved(QuestionCounts::from_tallies(
            &self.categories,
            &self.subcategories,
            &by_category,
            &by_subcategory,
        ));
        Ok(())
    }

    /// Recompute counts from the loaded questions.
    fn recount(&mut self) {
        self.counts = CountState::Resolved(count_questions(
            &self.categories,
            &self.subcategories,
            &self.questions,
        ));
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn subcategories(&self) -> &[SubCategory] {
        &self.subcategories
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub const fn counts(&self) -> &CountState {
        &self.counts
    }

    pub fn question(&self, id: &str) -> Result<&Question, CoreError> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| CoreError::not_found("question", id))
    }

    pub fn category(&self, id: &str) -> Result<&Category, CoreError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::not_found("category", id))
    }

    pub fn job(&self, id: &str) -> Result<&Job, CoreError> {
        self.jobs
            .iter()
            .find(|j| j.id == id)
            .ok_or_else(|| CoreError::not_found("job", id))
    }

    pub fn subcategories_of(&self, category_id: &str) -> Vec<&SubCategory> {
        subcategories_of(&self.subcategories, category_id)
    }

    // -----------------------------------------------------------------------
    // Questions
    // -----------------------------------------------------------------------

    pub async fn add_question(&mut self, mut new: NewQuestion) -> Result<Question, ProviderError> {
        new.tags = normalize_tags(&new.tags);
        validate_new_question(&new)?;

        let question = self.store.create_question(&new).await?;
        info!(id = %question.id, title = %question.title, "question created");
        self.questions.push(question.clone());
        self.recount();
        Ok(question)
    }

    pub async fn update_question(
        &mut self,
        id: &str,
        mut update: QuestionUpdate,
    ) -> Result<Question, ProviderError> {
        if let Some(difficulty) = update.difficulty {
            check_difficulty(difficulty)?;
        }
        if update.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation("title is required".into()).into());
        }
        if let Some(tags) = update.tags.take() {
            update.tags = Some(normalize_tags(&tags));
        }

        let question = self.store.update_question(id, &update).await?;
        info!(id, "question updated");
        upsert(&mut self.questions, question.clone(), |q| q.id.as_str());
        self.recount();
        Ok(question)
    }

    /// Flip mastery and mark the question reviewed now.
    pub async fn toggle_mastered(&mut self, id: &str) -> Result<Question, ProviderError> {
        let mastered = !self.question(id)?.mastered;
        let update = QuestionUpdateBuilder::new()
            .mastered(mastered)
            .last_reviewed(Utc::now())
            .build();

        let question = self.store.update_question(id, &update).await?;
        info!(id, mastered, "question mastery toggled");
        upsert(&mut self.questions, question.clone(), |q| q.id.as_str());
        Ok(question)
    }

    pub async fn delete_question(&mut self, id: &str) -> Result<(), ProviderError> {
        self.store.delete_question(id).await?;
        info!(id, "question deleted");
        self.questions.retain(|q| q.id != id);
        self.recount();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    pub async fn add_category(&mut self, name: &str) -> Result<Category, ProviderError> {
        let name = required_name("category", name)?;
        let category = self.store.create_category(&name).await?;
        info!(id = %category.id, name = %category.name, "category created");
        self.categories.push(category.clone());
        self.recount();
        Ok(category)
    }

    pub async fn rename_category(&mut self, id: &str, name: &str) -> Result<Category, ProviderError> {
        let name = required_name("category", name)?;
        let category = self.store.rename_category(id, &name).await?;
        info!(id, name = %category.name, "category renamed");
        upsert(&mut self.categories, category.clone(), |c| c.id.as_str());
        Ok(category)
    }

    /// Delete every subcategory of `id`, one store call each, then the
    /// category itself. Stops at the first failure; local state keeps
    /// exactly the deletes that succeeded. Returns how many subcategories
    /// were removed.
    pub async fn delete_category(&mut self, id: &str) -> Result<usize, ProviderError> {
        let children: Vec<String> = self
            .subcategories_of(id)
            .into_iter()
            .map(|s| s.id.clone())
            .collect();

        let mut deleted = 0;
        for child in &children {
            if let Err(error) = self.store.delete_subcategory(child).await {
                warn!(category = id, subcategory = %child, deleted, %error, "cascade delete stopped");
                self.recount();
                return Err(error.into());
            }
            self.subcategories.retain(|s| &s.id != child);
            deleted += 1;
        }

        if let Err(error) = self.store.delete_category(id).await {
            warn!(category = id, deleted, %error, "cascade delete stopped before category");
            self.recount();
            return Err(error.into());
        }
        self.categories.retain(|c| c.id != id);
        info!(id, subcategories = deleted, "category deleted with subcategories");
        self.recount();
        Ok(deleted)
    }

    // -----------------------------------------------------------------------
    // Subcategories
    // -----------------------------------------------------------------------

    pub async fn add_subcategory(
        &mut self,
        name: &str,
        category_id: &str,
    ) -> Result<SubCategory, ProviderError> {
        let name = required_name("subcategory", name)?;
        if category_id.trim().is_empty() {
            return Err(CoreError::Validation("parent category is required".into()).into());
        }
        let sub = self.store.create_subcategory(&name, category_id).await?;
        info!(id = %sub.id, parent = category_id, "subcategory created");
        self.subcategories.push(sub.clone());
        self.recount();
        Ok(sub)
    }

    pub async fn rename_subcategory(
        &mut self,
        id: &str,
        name: &str,
    ) -> Result<SubCategory, ProviderError> {
        let name = required_name("subcategory", name)?;
        let sub = self.store.rename_subcategory(id, &name).await?;
        info!(id, name = %sub.name, "subcategory renamed");
        upsert(&mut self.subcategories, sub.clone(), |s| s.id.as_str());
        Ok(sub)
    }

    pub async fn delete_subcategory(&mut self, id: &str) -> Result<(), ProviderError> {
        self.store.delete_subcategory(id).await?;
        info!(id, "subcategory deleted");
        self.subcategories.retain(|s| s.id != id);
        self.recount();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Jobs
    // -----------------------------------------------------------------------

    pub async fn add_job(&mut self, new: NewJob) -> Result<Job, ProviderError> {
        validate_new_job(&new)?;
        let job = self.store.create_job(&new).await?;
        info!(id = %job.id, company = %job.company, status = %job.status, "job created");
        self.jobs.push(job.clone());
        Ok(job)
    }

    /// Partial update. The result must still satisfy the interview-date rule.
    pub async fn update_job(&mut self, id: &str, update: JobUpdate) -> Result<Job, ProviderError> {
        let current = self.job(id)?;
        let status = update.status.unwrap_or(current.status);
        let interview_date = update.interview_date.unwrap_or(current.interview_date);
        check_interview_date(status, interview_date)?;

        let job = self.store.update_job(id, &update).await?;
        info!(id, "job updated");
        upsert(&mut self.jobs, job.clone(), |j| j.id.as_str());
        Ok(job)
    }

    /// Move a job to another pipeline stage. Sends only the status.
    pub async fn set_job_status(&mut self, id: &str, status: JobStatus) -> Result<Job, ProviderError> {
        let update = JobUpdateBuilder::new().status(status).build();
        let job = self.store.update_job(id, &update).await?;
        info!(id, %status, "job status changed");
        upsert(&mut self.jobs, job.clone(), |j| j.id.as_str());
        Ok(job)
    }

    pub async fn delete_job(&mut self, id: &str) -> Result<(), ProviderError> {
        self.store.delete_job(id).await?;
        info!(id, "job deleted");
        self.jobs.retain(|j| j.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::service::QbService;
    use crate::test_support::helpers::{new_job, new_question, test_service};

    async fn loaded() -> Provider<QbService> {
        let mut provider = Provider::new(test_service().await);
        provider.load().await.unwrap();
        provider
    }

    #[tokio::test]
    async fn counts_are_pending_until_loaded() {
        let mut provider = Provider::new(test_service().await);
        assert!(provider.counts().is_pending());
        provider.load().await.unwrap();
        assert!(!provider.counts().is_pending());
    }

    #[tokio::test]
    async fn add_question_normalizes_tags_and_updates_counts() {
        let mut provider = loaded().await;
        let cat = provider.add_category("Frontend").await.unwrap();
        let sub = provider.add_subcategory("React", &cat.id).await.unwrap();
        assert_eq!(provider.counts().category(&cat.id), Some(0));

        let mut new = new_question("Hooks", &cat.id, &sub.id);
        new.tags = vec![" react ".into(), "react".into(), String::new()];
        let q = provider.add_question(new).await.unwrap();

        assert_eq!(q.tags, vec!["react"]);
        assert_eq!(provider.questions().len(), 1);
        assert_eq!(provider.counts().category(&cat.id), Some(1));
        assert_eq!(provider.counts().subcategory(&sub.id), Some(1));
    }

    #[tokio::test]
    async fn invalid_question_never_reaches_store() {
        let mut provider = loaded().await;
        let mut new = new_question("Bad", "c", "s");
        new.difficulty = 9;
        let err = provider.add_question(new).await.unwrap_err();
        assert!(matches!(err, ProviderError::Core(CoreError::Validation(_))));
        assert!(provider.store().list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggle_mastered_flips_and_marks_reviewed() {
        let mut provider = loaded().await;
        let q = provider.add_question(new_question("Q", "c", "s")).await.unwrap();

        let toggled = provider.toggle_mastered(&q.id).await.unwrap();
        assert!(toggled.mastered);
        assert!(toggled.last_reviewed >= q.last_reviewed);
        assert!(provider.question(&q.id).unwrap().mastered);

        let back = provider.toggle_mastered(&q.id).await.unwrap();
        assert!(!back.mastered);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let mut provider = loaded().await;
        assert!(provider.toggle_mastered("qst-nope").await.unwrap_err().is_not_found());
        assert!(provider.delete_question("qst-nope").await.unwrap_err().is_not_found());
        assert!(provider.question("qst-nope").is_err());
    }

    #[tokio::test]
    async fn edit_appends_history() {
        let mut provider = loaded().await;
        let q = provider.add_question(new_question("Q", "c", "s")).await.unwrap();
        let update = QuestionUpdateBuilder::new()
            .answer("Clearer answer")
            .edit_note("clarified answer")
            .build();
        let edited = provider.update_question(&q.id, update).await.unwrap();
        assert_eq!(edited.edit_history.len(), 1);
        assert_eq!(provider.question(&q.id).unwrap().answer, "Clearer answer");
    }

    #[tokio::test]
    async fn cascade_removes_children_then_category() {
        let mut provider = loaded().await;
        let cat = provider.add_category("Backend").await.unwrap();
        let other = provider.add_category("Frontend").await.unwrap();
        provider.add_subcategory("SQL", &cat.id).await.unwrap();
        provider.add_subcategory("Caching", &cat.id).await.unwrap();
        provider.add_subcategory("React", &other.id).await.unwrap();

        let removed = provider.delete_category(&cat.id).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(provider.categories().len(), 1);
        assert_eq!(provider.subcategories().len(), 1);
        assert_eq!(provider.store().list_subcategories().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_category_name_is_rejected() {
        let mut provider = loaded().await;
        assert!(provider.add_category("   ").await.is_err());
        assert!(provider.categories().is_empty());
    }

    #[tokio::test]
    async fn interview_update_needs_a_date() {
        let mut provider = loaded().await;
        provider.load_jobs().await.unwrap();
        let job = provider.add_job(new_job("Acme", JobStatus::Applied)).await.unwrap();

        let update = JobUpdateBuilder::new().status(JobStatus::Interview).build();
        assert!(provider.update_job(&job.id, update).await.is_err());
        assert_eq!(provider.job(&job.id).unwrap().status, JobStatus::Applied);

        let update = JobUpdateBuilder::new()
            .status(JobStatus::Interview)
            .interview_date(chrono::NaiveDate::from_ymd_opt(2024, 2, 2))
            .build();
        let updated = provider.update_job(&job.id, update).await.unwrap();
        assert_eq!(updated.status, JobStatus::Interview);
    }

    #[tokio::test]
    async fn status_change_sends_only_status() {
        let mut provider = loaded().await;
        let job = provider.add_job(new_job("Acme", JobStatus::Applied)).await.unwrap();
        let moved = provider.set_job_status(&job.id, JobStatus::Offer).await.unwrap();
        assert_eq!(moved.status, JobStatus::Offer);
        assert_eq!(moved.position, job.position);
        assert_eq!(provider.jobs()[0].status, JobStatus::Offer);

        provider.delete_job(&job.id).await.unwrap();
        assert!(provider.jobs().is_empty());
    }
}
