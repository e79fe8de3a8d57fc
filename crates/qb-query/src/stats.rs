//! Dashboard statistics.

use chrono::{DateTime, TimeDelta, Utc};
use qb_core::entities::Question;
use qb_core::responses::DashboardStats;

/// How many recently added questions the dashboard lists.
pub const RECENT_LIMIT: usize = 5;

/// Totals plus the newest questions. "Recent" means strictly after
/// `now - window_days`.
#[must_use]
pub fn dashboard_stats(questions: &[Question], now: DateTime<Utc>, window_days: u32) -> DashboardStats {
    let cutoff = now - TimeDelta::days(i64::from(window_days));
    let mut recent: Vec<&Question> = questions.iter().collect();
    recent.sort_by(|a, b| b.date_added.cmp(&a.date_added));

    DashboardStats {
        total_questions: count_where(questions, |_| true),
        mastered_questions: count_where(questions, |q| q.mastered),
        recently_added: count_where(questions, |q| q.date_added > cutoff),
        studied_this_week: count_where(questions, |q| q.last_reviewed > cutoff),
        recent: recent.into_iter().take(RECENT_LIMIT).cloned().collect(),
    }
}

fn count_where(questions: &[Question], pred: impl Fn(&Question) -> bool) -> u32 {
    u32::try_from(questions.iter().filter(|q| pred(q)).count()).unwrap_or(u32::MAX)
}
