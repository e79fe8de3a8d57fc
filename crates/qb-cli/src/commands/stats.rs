use chrono::Utc;
use qb_query::stats::dashboard_stats;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qbank stats`.
pub fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let window = args
        .window_days
        .unwrap_or(ctx.config.general.recent_window_days);
    if window == 0 {
        anyhow::bail!("--window-days must be at least 1");
    }
    let stats = dashboard_stats(ctx.provider.questions(), Utc::now(), window);
    output(&stats, flags.format)
}
