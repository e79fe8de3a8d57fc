//! Question update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct QuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// Appends an edit-history entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_note: Option<String>,
}

impl QuestionUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.sub_category.is_none()
            && self.difficulty.is_none()
            && self.question.is_none()
            && self.answer.is_none()
            && self.tags.is_none()
            && self.related_questions.is_none()
            && self.mastered.is_none()
            && self.last_reviewed.is_none()
            && self.edit_note.is_none()
    }

    /// True when the update touches anything beyond mastery and review time.
    #[must_use]
    pub const fn edits_content(&self) -> bool {
        self.title.is_some()
            || self.category.is_some()
            || self.sub_category.is_some()
            || self.difficulty.is_some()
            || self.question.is_some()
            || self.answer.is_some()
            || self.tags.is_some()
            || self.related_questions.is_some()
            || self.edit_note.is_some()
    }
}

pub struct QuestionUpdateBuilder(QuestionUpdate);

impl QuestionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuestionUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.0.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.0.sub_category = Some(sub_category.into());
        self
    }

    #[must_use]
    pub const fn difficulty(mut self, difficulty: u8) -> Self {
        self.0.difficulty = Some(difficulty);
        self
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.0.question = Some(question.into());
        self
    }

    #[must_use]
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.0.answer = Some(answer.into());
        self
    }

    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.0.tags = Some(tags);
        self
    }

    #[must_use]
    pub fn related_questions(mut self, related: Vec<String>) -> Self {
        self.0.related_questions = Some(related);
        self
    }

    #[must_use]
    pub const fn mastered(mut self, mastered: bool) -> Self {
        self.0.mastered = Some(mastered);
        self
    }

    #[must_use]
    pub const fn last_reviewed(mut self, at: DateTime<Utc>) -> Self {
        self.0.last_reviewed = Some(at);
        self
    }

    #[must_use]
    pub fn edit_note(mut self, description: impl Into<String>) -> Self {
        self.0.edit_note = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> QuestionUpdate {
        self.0
    }
}

impl Default for QuestionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
