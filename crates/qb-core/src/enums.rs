//! Status, filter, and sort enums for qbank.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Filter enums carry an `Any` variant and a lenient parser: an unrecognized
//! value means "no restriction" rather than an error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Pipeline stage of a job application.
///
/// ```text
/// interested → applied → interview → offer
///                                  → rejected
///                                  → ghosted
/// ```
///
/// Any stage may be set directly; the order only drives sorting and the
/// active/archived split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Interested,
    Applied,
    Interview,
    Offer,
    Rejected,
    Ghosted,
}

impl JobStatus {
    /// Pipeline order, earliest stage first.
    pub const PIPELINE: [Self; 6] = [
        Self::Interested,
        Self::Applied,
        Self::Interview,
        Self::Offer,
        Self::Rejected,
        Self::Ghosted,
    ];

    /// Position of this status in [`Self::PIPELINE`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Interested => 0,
            Self::Applied => 1,
            Self::Interview => 2,
            Self::Offer => 3,
            Self::Rejected => 4,
            Self::Ghosted => 5,
        }
    }

    /// Whether the application is still in flight.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Interested | Self::Applied | Self::Interview)
    }

    /// Whether the application needs an interview date.
    #[must_use]
    pub const fn requires_interview_date(self) -> bool {
        matches!(self, Self::Interview)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interested => "interested",
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
            Self::Ghosted => "ghosted",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortDirection
// ---------------------------------------------------------------------------

/// Direction applied to any sort comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionSortField
// ---------------------------------------------------------------------------

/// Field used to order question lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSortField {
    Title,
    Difficulty,
    #[default]
    LastReviewed,
}

impl QuestionSortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Difficulty => "difficulty",
            Self::LastReviewed => "last_reviewed",
        }
    }
}

impl fmt::Display for QuestionSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JobSortBy
// ---------------------------------------------------------------------------

/// Field used to order job applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JobSortBy {
    #[default]
    Date,
    Company,
    Status,
}

impl JobSortBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Company => "company",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for JobSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// Review-recency window for the question filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[default]
    Any,
    Today,
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    /// Parse a raw filter value. Empty or unknown values yield [`Self::Any`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            "quarter" => Self::Quarter,
            "year" => Self::Year,
            _ => Self::Any,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MasteryFilter
// ---------------------------------------------------------------------------

/// Mastery restriction for the question filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MasteryFilter {
    #[default]
    Any,
    Mastered,
    NotMastered,
}

impl MasteryFilter {
    /// Parse a raw filter value. Accepts `not-mastered` and `not_mastered`;
    /// empty or unknown values yield [`Self::Any`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "mastered" => Self::Mastered,
            "not_mastered" => Self::NotMastered,
            _ => Self::Any,
        }
    }

    /// Whether a question with the given mastery flag passes.
    #[must_use]
    pub const fn admits(self, mastered: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Mastered => mastered,
            Self::NotMastered => !mastered,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Mastered => "mastered",
            Self::NotMastered => "not_mastered",
        }
    }
}

impl fmt::Display for MasteryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
