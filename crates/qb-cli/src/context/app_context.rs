use anyhow::Context;
use qb_config::QbConfig;
use qb_db::provider::Provider;
use qb_db::service::QbService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub provider: Provider<QbService>,
    pub config: QbConfig,
    pub db_path: String,
}

impl AppContext {
    /// Open the store (`--db` wins over `store.path`) and load every collection.
    pub async fn init(config: QbConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let db_path = db_override.map_or_else(|| config.store.path.clone(), str::to_string);

        let service = QbService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open qbank store at {db_path}"))?;

        let mut provider = Provider::new(service);
        provider
            .refresh()
            .await
            .context("failed to load qbank collections")?;

        tracing::debug!(
            db = %db_path,
            questions = provider.questions().len(),
            jobs = provider.jobs().len(),
            "application context ready"
        );

        Ok(Self {
            provider,
            config,
            db_path,
        })
    }
}
