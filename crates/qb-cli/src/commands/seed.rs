use anyhow::Context;
use qb_core::responses::SeedReport;
use qb_db::repos::seed::SeedFile;
use tracing::info;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `qbank seed <file>`.
pub async fn handle(args: &SeedArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = import(args, ctx).await?;
    output(&report, flags.format)
}

async fn import(args: &SeedArgs, ctx: &mut AppContext) -> anyhow::Result<SeedReport> {
    let seed = SeedFile::from_path(&args.file)
        .with_context(|| format!("failed to read seed file {}", args.file.display()))?;
    let report = ctx.provider.store().import_seed(&seed).await?;
    info!(file = %args.file.display(), questions = report.questions, "seed imported");

    ctx.provider
        .refresh()
        .await
        .context("failed to reload collections after seeding")?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::import;
    use crate::cli::root_commands::SeedArgs;
    use crate::context::test_support::test_context;

    const SEED: &str = r#"{
        "categories": [{"id": "cat-alg", "name": "Algorithms"}],
        "subcategories": [{"id": "sub-graph", "name": "Graphs", "category_id": "cat-alg"}],
        "tags": [{"name": "bfs", "count": 1}],
        "questions": [{
            "id": "q-bfs",
            "title": "Breadth-first search",
            "category": "cat-alg",
            "sub_category": "sub-graph",
            "difficulty": 2,
            "question": "Walk a graph level by level.",
            "answer": "Use a queue.",
            "tags": ["bfs"]
        }],
        "jobs": []
    }"#;

    #[tokio::test]
    async fn seed_loads_and_refreshes_the_provider() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(SEED.as_bytes()).expect("seed written");

        let mut ctx = test_context().await;
        let args = SeedArgs {
            file: file.path().to_path_buf(),
        };
        let report = import(&args, &mut ctx).await.expect("seed import");

        assert_eq!(report.questions, 1);
        assert_eq!(report.tags, 1);
        assert_eq!(ctx.provider.questions()[0].id, "q-bfs");
        assert_eq!(ctx.provider.counts().category("cat-alg"), Some(1));
        assert_eq!(ctx.provider.counts().subcategory("sub-graph"), Some(1));
        assert_eq!(ctx.provider.tags().len(), 1);
    }

    #[tokio::test]
    async fn missing_seed_file_names_the_path() {
        let mut ctx = test_context().await;
        let args = SeedArgs {
            file: "/nonexistent/qbank-seed.json".into(),
        };
        let err = import(&args, &mut ctx).await.expect_err("missing file");
        assert!(format!("{err:#}").contains("qbank-seed.json"));
    }
}
