use chrono::{DateTime, Utc};
use qb_core::entities::{Category, Question, SubCategory};
use qb_core::enums::{DateRange, MasteryFilter, QuestionSortField, SortDirection};
use qb_core::names::resolve_name;
use qb_query::filter::{QuestionFilter, QuestionSort, query_questions};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Default)]
pub struct Params {
    pub category: Option<String>,
    pub difficulty: Option<u8>,
    pub search: Option<String>,
    pub range: Option<String>,
    pub mastery: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub limit: Option<u32>,
}

/// One line of `question list`.
#[derive(Debug, Serialize)]
pub struct QuestionRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub sub_category: String,
    pub difficulty: u8,
    pub mastered: bool,
    pub tags: Vec<String>,
    pub last_reviewed: DateTime<Utc>,
}

impl QuestionRow {
    fn new(question: &Question, categories: &[Category], subcategories: &[SubCategory]) -> Self {
        Self {
            id: question.id.clone(),
            title: question.title.clone(),
            category: resolve_name(categories, &question.category).to_string(),
            sub_category: resolve_name(subcategories, &question.sub_category).to_string(),
            difficulty: question.difficulty,
            mastered: question.mastered,
            tags: question.tags.clone(),
            last_reviewed: question.last_reviewed,
        }
    }
}

/// Build the filter from raw flag values. Unknown range and mastery values
/// mean no restriction.
#[must_use]
pub fn filter_from(
    category: Option<&str>,
    difficulty: Option<u8>,
    search: Option<&str>,
    range: Option<&str>,
    mastery: Option<&str>,
) -> QuestionFilter {
    QuestionFilter {
        category: category.map(str::to_string),
        difficulty: difficulty.unwrap_or(0),
        search_term: search.unwrap_or_default().to_string(),
        date_range: range.map_or(DateRange::Any, DateRange::parse_lenient),
        mastered: mastery.map_or(MasteryFilter::Any, MasteryFilter::parse_lenient),
    }
}

/// Resolve `--sort`/`--direction` against the configured defaults.
pub fn sort_from(
    sort: Option<&str>,
    direction: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<QuestionSort> {
    let field = match sort {
        Some(raw) => parse_enum::<QuestionSortField>(raw, "sort")?,
        None => ctx.config.general.default_sort_field,
    };
    let direction = match direction {
        Some(raw) => parse_enum::<SortDirection>(raw, "direction")?,
        None => ctx.config.general.default_sort_direction,
    };
    Ok(QuestionSort::new(field, direction))
}

pub fn select(
    params: &Params,
    ctx: &AppContext,
    flags: &GlobalFlags,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<QuestionRow>> {
    let filter = filter_from(
        params.category.as_deref(),
        params.difficulty,
        params.search.as_deref(),
        params.range.as_deref(),
        params.mastery.as_deref(),
    );
    let sort = sort_from(params.sort.as_deref(), params.direction.as_deref(), ctx)?;
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);

    let provider = &ctx.provider;
    let rows = query_questions(provider.questions(), &filter, sort, now)
        .into_iter()
        .take(as_len(limit))
        .map(|q| QuestionRow::new(q, provider.categories(), provider.subcategories()))
        .collect();
    Ok(rows)
}

pub fn run(params: &Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = select(params, ctx, flags, Utc::now())?;
    output(&rows, flags.format)
}
