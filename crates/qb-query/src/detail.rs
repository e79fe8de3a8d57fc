//! Question detail assembly and taxonomy summaries.

use qb_core::answer::segment_answer;
use qb_core::entities::{Category, Question, SubCategory};
use qb_core::names::{parent_name, resolve_name};
use qb_core::responses::{
    CategoryListResponse, CategorySummary, QuestionDetail, RelatedQuestion, SubCategorySummary,
};

use crate::counts::QuestionCounts;

/// Related questions in related-id order. Unknown ids are skipped.
#[must_use]
pub fn related_questions(
    question: &Question,
    questions: &[Question],
    categories: &[Category],
) -> Vec<RelatedQuestion> {
    question
        .related_questions
        .iter()
        .filter_map(|id| questions.iter().find(|q| &q.id == id))
        .map(|related| RelatedQuestion {
            id: related.id.clone(),
            title: related.title.clone(),
            category_name: resolve_name(categories, &related.category).to_string(),
            difficulty: related.difficulty,
        })
        .collect()
}

/// Everything `question get` shows about one question.
#[must_use]
pub fn question_detail(
    question: &Question,
    questions: &[Question],
    categories: &[Category],
    subcategories: &[SubCategory],
) -> QuestionDetail {
    QuestionDetail {
        question: question.clone(),
        category_name: resolve_name(categories, &question.category).to_string(),
        sub_category_name: resolve_name(subcategories, &question.sub_category).to_string(),
        answer_segments: segment_answer(&question.answer),
        related: related_questions(question, questions, categories),
    }
}

/// Subcategories owned by `category_id`, in list order.
#[must_use]
pub fn subcategories_of<'a>(subcategories: &'a [SubCategory], category_id: &str) -> Vec<&'a SubCategory> {
    subcategories
        .iter()
        .filter(|s| s.category_id == category_id)
        .collect()
}

fn summarize_sub(sub: &SubCategory, categories: &[Category], counts: &QuestionCounts) -> SubCategorySummary {
    SubCategorySummary {
        id: sub.id.clone(),
        name: sub.name.clone(),
        parent_name: parent_name(sub, categories).to_string(),
        count: counts.subcategory(&sub.id),
    }
}

/// Categories with their subcategories and counts. Subcategories whose
/// parent is gone are listed separately under `orphaned`.
#[must_use]
pub fn summarize_categories(
    categories: &[Category],
    subcategories: &[SubCategory],
    counts: &QuestionCounts,
) -> CategoryListResponse {
    let summaries = categories
        .iter()
        .map(|category| CategorySummary {
            id: category.id.clone(),
            name: category.name.clone(),
            count: counts.category(&category.id),
            subcategories: subcategories_of(subcategories, &category.id)
                .into_iter()
                .map(|sub| summarize_sub(sub, categories, counts))
                .collect(),
        })
        .collect();

    let orphaned = subcategories
        .iter()
        .filter(|sub| !categories.iter().any(|c| c.id == sub.category_id))
        .map(|sub| summarize_sub(sub, categories, counts))
        .collect();

    CategoryListResponse {
        categories: summaries,
        orphaned,
        total: counts.total(),
    }
}
