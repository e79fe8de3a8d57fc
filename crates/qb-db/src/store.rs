//! The store contract the [`crate::provider::Provider`] is written against.
//!
//! [`QbService`] is the production implementation. Any failure means the
//! operation did not take effect.

use std::collections::HashMap;

use qb_core::entities::{Category, Job, NewJob, NewQuestion, Question, SubCategory, Tag};

use crate::error::DatabaseError;
use crate::service::QbService;
use crate::updates::job::JobUpdate;
use crate::updates::question::QuestionUpdate;

/// Grouped question counts: `(by category id, by subcategory id)`.
pub type Tallies = (HashMap<String, u32>, HashMap<String, u32>);

#[allow(async_fn_in_trait)]
pub trait Store {
    async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError>;
    async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError>;
    async fn update_question(
        &self,
        id: &str,
        update: &QuestionUpdate,
    ) -> Result<Question, DatabaseError>;
    async fn delete_question(&self, id: &str) -> Result<(), DatabaseError>;

    async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError>;
    async fn create_category(&self, name: &str) -> Result<Category, DatabaseError>;
    async fn rename_category(&self, id: &str, name: &str) -> Result<Category, DatabaseError>;
    async fn delete_category(&self, id: &str) -> Result<(), DatabaseError>;

    async fn list_subcategories(&self) -> Result<Vec<SubCategory>, DatabaseError>;
    async fn create_subcategory(
        &self,
        name: &str,
        category_id: &str,
    ) -> Result<SubCategory, DatabaseError>;
    async fn rename_subcategory(&self, id: &str, name: &str) -> Result<SubCategory, DatabaseError>;
    async fn delete_subcategory(&self, id: &str) -> Result<(), DatabaseError>;

    async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError>;

    async fn list_jobs(&self) -> Result<Vec<Job>, DatabaseError>;
    async fn create_job(&self, new: &NewJob) -> Result<Job, DatabaseError>;
    async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<Job, DatabaseError>;
    async fn delete_job(&self, id: &str) -> Result<(), DatabaseError>;

    async fn count_questions_by_category(&self, id: &str) -> Result<u32, DatabaseError>;
    async fn count_questions_by_subcategory(&self, id: &str) -> Result<u32, DatabaseError>;
    /// Every count in one round trip.
    async fn question_tallies(&self) -> Result<Tallies, DatabaseError>;
}

impl Store for QbService {
    async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        Self::list_questions(self).await
    }

    async fn create_question(&self, new: &NewQuestion) -> Result<Question, DatabaseError> {
        Self::create_question(self, new).await
    }

    async fn update_question(
        &self,
        id: &str,
        update: &QuestionUpdate,
    ) -> Result<Question, DatabaseError> {
        Self::update_question(self, id, update).await
    }

    async fn delete_question(&self, id: &str) -> Result<(), DatabaseError> {
        Self::delete_question(self, id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, DatabaseError> {
        Self::list_categories(self).await
    }

    async fn create_category(&self, name: &str) -> Result<Category, DatabaseError> {
        Self::create_category(self, name).await
    }

    async fn rename_category(&self, id: &str, name: &str) -> Result<Category, DatabaseError> {
        Self::rename_category(self, id, name).await
    }

    async fn delete_category(&self, id: &str) -> Result<(), DatabaseError> {
        Self::delete_category(self, id).await
    }

    async fn list_subcategories(&self) -> Result<Vec<SubCategory>, DatabaseError> {
        Self::list_subcategories(self).await
    }

    async fn create_subcategory(
        &self,
        name: &str,
        category_id: &str,
    ) -> Result<SubCategory, DatabaseError> {
        Self::create_subcategory(self, name, category_id).await
    }

    async fn rename_subcategory(&self, id: &str, name: &str) -> Result<SubCategory, DatabaseError> {
        Self::rename_subcategory(self, id, name).await
    }

    async fn delete_subcategory(&self, id: &str) -> Result<(), DatabaseError> {
        Self::delete_subcategory(self, id).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        Self::list_tags(self).await
    }

    async fn list_jobs(&self) -> Result<Vec<Job>, DatabaseError> {
        Self::list_jobs(self).await
    }

    async fn create_job(&self, new: &NewJob) -> Result<Job, DatabaseError> {
        Self::create_job(self, new).await
    }

    async fn update_job(&self, id: &str, update: &JobUpdate) -> Result<Job, DatabaseError> {
        Self::update_job(self, id, update).await
    }

    async fn delete_job(&self, id: &str) -> Result<(), DatabaseError> {
        Self::delete_job(self, id).await
    }

    async fn count_questions_by_category(&self, id: &str) -> Result<u32, DatabaseError> {
        Self::count_questions_by_category(self, id).await
    }

    async fn count_questions_by_subcategory(&self, id: &str) -> Result<u32, DatabaseError> {
        Self::count_questions_by_subcategory(self, id).await
    }

    async fn question_tallies(&self) -> Result<Tallies, DatabaseError> {
        Self::question_tallies(self).await
    }
}
