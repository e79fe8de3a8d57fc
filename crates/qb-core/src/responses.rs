//! CLI response types returned as JSON by `qbank` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::answer::AnswerSegment;
use crate::entities::{Job, Question};

/// Response from `qbank question get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionDetail {
    pub question: Question,
    pub category_name: String,
    pub sub_category_name: String,
    pub answer_segments: Vec<AnswerSegment>,
    pub related: Vec<RelatedQuestion>,
}

/// Short form of a related question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RelatedQuestion {
    pub id: String,
    pub title: String,
    pub category_name: String,
    pub difficulty: u8,
}

/// One row of `qbank category list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub count: u32,
    pub subcategories: Vec<SubCategorySummary>,
}

/// A subcategory with its derived question count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubCategorySummary {
    pub id: String,
    pub name: String,
    pub parent_name: String,
    pub count: u32,
}

/// Response from `qbank category list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
    /// Subcategories whose parent category no longer exists.
    pub orphaned: Vec<SubCategorySummary>,
    pub total: u32,
}

/// Job applications split into in-flight and closed pipelines.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobBoard {
    pub active: Vec<Job>,
    pub archived: Vec<Job>,
}

/// Response from `qbank stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_questions: u32,
    pub mastered_questions: u32,
    pub recently_added: u32,
    pub studied_this_week: u32,
    pub recent: Vec<Question>,
}

/// Outcome of a quiz run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizScore {
    pub answered: u32,
    pub correct: u32,
    pub percentage: u32,
}

/// Response from `qbank seed`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u32,
    pub subcategories: u32,
    pub tags: u32,
    pub questions: u32,
    pub jobs: u32,
}
