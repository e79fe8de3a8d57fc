//! Derived question counts per category and subcategory.
//!
//! Every known taxonomy id gets an entry, so a category with no questions
//! reads as `0` rather than missing. The same [`QuestionCounts`] shape is
//! produced whether the tallies are computed locally from loaded questions
//! or fetched from the store as grouped aggregates.

use std::collections::{BTreeMap, HashMap};

use qb_core::entities::{Category, Question, SubCategory};
use serde::{Deserialize, Serialize};

/// Question counts keyed by taxonomy id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCounts {
    pub by_category: BTreeMap<String, u32>,
    pub by_subcategory: BTreeMap<String, u32>,
}

impl QuestionCounts {
    /// Build counts for the known taxonomy from raw tallies. Tally entries
    /// for unknown ids are dropped; known ids missing from the tallies get 0.
    #[must_use]
    pub fn from_tallies(
        categories: &[Category],
        subcategories: &[SubCategory],
        category_tally: &HashMap<String, u32>,
        subcategory_tally: &HashMap<String, u32>,
    ) -> Self {
        let by_category = categories
            .iter()
            .map(|c| (c.id.clone(), category_tally.get(&c.id).copied().unwrap_or(0)))
            .collect();
        let by_subcategory = subcategories
            .iter()
            .map(|s| (s.id.clone(), subcategory_tally.get(&s.id).copied().unwrap_or(0)))
            .collect();
        Self {
            by_category,
            by_subcategory,
        }
    }

    /// Count for a category id; 0 when unknown.
    #[must_use]
    pub fn category(&self, id: &str) -> u32 {
        self.by_category.get(id).copied().unwrap_or(0)
    }

    /// Count for a subcategory id; 0 when unknown.
    #[must_use]
    pub fn subcategory(&self, id: &str) -> u32 {
        self.by_subcategory.get(id).copied().unwrap_or(0)
    }

    /// Sum of the per-category counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.by_category.values().sum()
    }
}

/// Tally questions by category and by subcategory.
#[must_use]
pub fn tally(questions: &[Question]) -> (HashMap<String, u32>, HashMap<String, u32>) {
    let mut by_category: HashMap<String, u32> = HashMap::new();
    let mut by_subcategory: HashMap<String, u32> = HashMap::new();
    for question in questions {
        *by_category.entry(question.category.clone()).or_default() += 1;
        *by_subcategory
            .entry(question.sub_category.clone())
            .or_default() += 1;
    }
    (by_category, by_subcategory)
}

/// Recompute counts for the given taxonomy from the loaded questions.
#[must_use]
pub fn count_questions(
    categories: &[Category],
    subcategories: &[SubCategory],
    questions: &[Question],
) -> QuestionCounts {
    let (by_category, by_subcategory) = tally(questions);
    QuestionCounts::from_tallies(categories, subcategories, &by_category, &by_subcategory)
}

/// Loading state of the derived counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountState {
    #[default]
    Pending,
    Resolved(QuestionCounts),
}

impl CountState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn resolved(&self) -> Option<&QuestionCounts> {
        match self {
            Self::Pending => None,
            Self::Resolved(counts) => Some(counts),
        }
    }

    /// Category count once resolved.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<u32> {
        self.resolved().map(|c| c.category(id))
    }

    /// Subcategory count once resolved.
    #[must_use]
    pub fn subcategory(&self, id: &str) -> Option<u32> {
        self.resolved().map(|c| c.subcategory(id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{QuestionBuilder, category, subcategory};

    fn taxonomy() -> (Vec<Category>, Vec<SubCategory>) {
        (
            vec![
                category("frontend", "Frontend"),
                category("backend", "Backend"),
                category("devops", "DevOps"),
            ],
            vec![
                subcategory("react", "React", "frontend"),
                subcategory("sql", "SQL", "backend"),
                subcategory("k8s", "Kubernetes", "devops"),
            ],
        )
    }

    fn questions() -> Vec<Question> {
        let mut out = Vec::new();
        for i in 0..3 {
            out.push(
                QuestionBuilder::new(&format!("f{i}"), "front")
                    .category("frontend", "react")
                    .build(),
            );
        }
        for i in 0..2 {
            out.push(
                QuestionBuilder::new(&format!("b{i}"), "back")
                    .category("backend", "sql")
                    .build(),
            );
        }
        out
    }

    #[test]
    fn counts_by_category_and_subcategory() {
        let (cats, subs) = taxonomy();
        let counts = count_questions(&cats, &subs, &questions());

        assert_eq!(counts.category("frontend"), 3);
        assert_eq!(counts.category("backend"), 2);
        assert_eq!(counts.subcategory("react"), 3);
        assert_eq!(counts.subcategory("sql"), 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn zero_match_ids_are_present_as_zero() {
        let (cats, subs) = taxonomy();
        let counts = count_questions(&cats, &subs, &questions());
        assert_eq!(counts.by_category.get("devops"), Some(&0));
        assert_eq!(counts.by_subcategory.get("k8s"), Some(&0));
        assert_eq!(counts.category("never-existed"), 0);
    }

    #[test]
    fn empty_taxonomy_yields_empty_maps() {
        let counts = count_questions(&[], &[], &questions());
        assert!(counts.by_category.is_empty());
        assert!(counts.by_subcategory.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn dangling_question_references_are_not_counted_in_total() {
        let (cats, subs) = taxonomy();
        let mut qs = questions();
        qs.push(QuestionBuilder::new("x", "orphan").category("gone", "gone-sub").build());
        let counts = count_questions(&cats, &subs, &qs);
        assert_eq!(counts.total(), 5);
        assert!(!counts.by_category.contains_key("gone"));
    }

    #[test]
    fn store_tallies_match_local_recompute() {
        let (cats, subs) = taxonomy();
        let local = count_questions(&cats, &subs, &questions());

        let category_tally = HashMap::from([
            ("frontend".to_string(), 3),
            ("backend".to_string(), 2),
            ("stale".to_string(), 9),
        ]);
        let sub_tally = HashMap::from([("react".to_string(), 3), ("sql".to_string(), 2)]);
        let remote = QuestionCounts::from_tallies(&cats, &subs, &category_tally, &sub_tally);

        assert_eq!(local, remote);
    }

    #[test]
    fn count_state_transitions() {
        let state = CountState::default();
        assert!(state.is_pending());
        assert_eq!(state.category("frontend"), None);

        let (cats, subs) = taxonomy();
        let state = CountState::Resolved(count_questions(&cats, &subs, &questions()));
        assert!(!state.is_pending());
        assert_eq!(state.category("frontend"), Some(3));
        assert_eq!(state.subcategory("k8s"), Some(0));
    }
}
