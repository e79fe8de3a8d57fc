//! Question filter and sort engine.
//!
//! A [`QuestionFilter`] is a conjunction of predicates; every neutral field
//! (empty category, difficulty `0`, empty search term, `Any` range, `Any`
//! mastery) imposes no restriction. Sorting is stable, so ties keep their
//! filter-result order. Neither step mutates the input slice.

use std::cmp::Ordering;

use chrono::{DateTime, Months, NaiveDate, TimeDelta, Utc};
use qb_core::entities::Question;
use qb_core::enums::{DateRange, MasteryFilter, QuestionSortField, SortDirection};
use serde::{Deserialize, Serialize};

use crate::compare::{contains_ignore_case, locale_cmp};

/// Category value that means "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Filter configuration for question lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFilter {
    /// Matches a question's category OR subcategory id.
    pub category: Option<String>,
    /// `0` means any difficulty.
    pub difficulty: u8,
    /// Case-insensitive substring of the title or any tag.
    pub search_term: String,
    pub date_range: DateRange,
    pub mastered: MasteryFilter,
}

impl QuestionFilter {
    /// Whether this filter lets every question through.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.category_id().is_none()
            && self.difficulty == 0
            && self.search_term.is_empty()
            && self.date_range == DateRange::Any
            && self.mastered == MasteryFilter::Any
    }

    /// The active category restriction, if any.
    fn category_id(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    }

    /// Whether `question` passes every active predicate.
    #[must_use]
    pub fn matches(&self, question: &Question, now: DateTime<Utc>) -> bool {
        if let Some(category) = self.category_id() {
            if question.category != category && question.sub_category != category {
                return false;
            }
        }

        if self.difficulty > 0 && question.difficulty != self.difficulty {
            return false;
        }

        if !self.search_term.is_empty()
            && !contains_ignore_case(&question.title, &self.search_term)
            && !question
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag, &self.search_term))
        {
            return false;
        }

        if !ReviewWindow::new(self.date_range, now).admits(question.last_reviewed) {
            return false;
        }

        self.mastered.admits(question.mastered)
    }
}

/// Recency window derived from a [`DateRange`] and the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewWindow {
    Unbounded,
    /// Same calendar day (UTC), not a rolling 24 hours.
    SameDay(NaiveDate),
    /// Reviewed at or after this instant.
    Since(DateTime<Utc>),
}

impl ReviewWindow {
    #[must_use]
    pub fn new(range: DateRange, now: DateTime<Utc>) -> Self {
        // Month steps clamp: Mar 31 minus one month is Feb 29 (or 28).
        let months_back = |n| {
            now.checked_sub_months(Months::new(n))
                .map_or(Self::Unbounded, Self::Since)
        };
        match range {
            DateRange::Any => Self::Unbounded,
            DateRange::Today => Self::SameDay(now.date_naive()),
            DateRange::Week => Self::Since(now - TimeDelta::days(7)),
            DateRange::Month => months_back(1),
            DateRange::Quarter => months_back(3),
            DateRange::Year => months_back(12),
        }
    }

    #[must_use]
    pub fn admits(self, reviewed: DateTime<Utc>) -> bool {
        match self {
            Self::Unbounded => true,
            Self::SameDay(day) => reviewed.date_naive() == day,
            Self::Since(cutoff) => reviewed >= cutoff,
        }
    }
}

/// Sort configuration for question lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSort {
    pub field: QuestionSortField,
    pub direction: SortDirection,
}

impl QuestionSort {
    #[must_use]
    pub const fn new(field: QuestionSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two questions under this configuration.
    #[must_use]
    pub fn compare(&self, a: &Question, b: &Question) -> Ordering {
        let ascending = match self.field {
            QuestionSortField::Title => locale_cmp(&a.title, &b.title),
            QuestionSortField::Difficulty => a.difficulty.cmp(&b.difficulty),
            QuestionSortField::LastReviewed => a.last_reviewed.cmp(&b.last_reviewed),
        };
        self.direction.apply(ascending)
    }

    /// Toggle behavior of a sort header: same field flips direction, a new
    /// field starts ascending.
    #[must_use]
    pub fn select(self, field: QuestionSortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

/// Questions passing `filter`, in input order.
#[must_use]
pub fn filter_questions<'a>(
    questions: &'a [Question],
    filter: &QuestionFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Question> {
    questions.iter().filter(|q| filter.matches(q, now)).collect()
}

/// Stable in-place sort of a derived list.
pub fn sort_questions(questions: &mut [&Question], sort: QuestionSort) {
    questions.sort_by(|a, b| sort.compare(a, b));
}

/// Filter then sort, producing a new ordered view over `questions`.
#[must_use]
pub fn query_questions<'a>(
    questions: &'a [Question],
    filter: &QuestionFilter,
    sort: QuestionSort,
    now: DateTime<Utc>,
) -> Vec<&'a Question> {
    let mut view = filter_questions(questions, filter, now);
    sort_questions(&mut view, sort);
    view
}
