use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single interview question with its answer and review metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub title: String,
    /// Category id. May dangle; display falls back to the raw id.
    pub category: String,
    /// Subcategory id. May dangle; display falls back to the raw id.
    pub sub_category: String,
    /// Difficulty: 1 (easiest) to 5 (hardest).
    pub difficulty: u8,
    pub question: String,
    /// Answer body. Fenced code blocks (```` ```lang ````) are rendered as code.
    pub answer: String,
    pub tags: Vec<String>,
    pub mastered: bool,
    pub date_added: DateTime<Utc>,
    pub last_reviewed: DateTime<Utc>,
    #[serde(default)]
    pub related_questions: Vec<String>,
    #[serde(default)]
    pub edit_history: Vec<EditRecord>,
}

/// One entry in a question's edit history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EditRecord {
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Caller-supplied fields for a new question. The store assigns the id,
/// timestamps, and mastery state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub category: String,
    pub sub_category: String,
    pub difficulty: u8,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub related_questions: Vec<String>,
}
