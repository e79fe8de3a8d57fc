use std::path::Path;

use anyhow::Context;
use qb_config::QbConfig;

/// Load `.env` from the working directory (when present), then the layered config.
pub fn load_config() -> anyhow::Result<QbConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;
    QbConfig::load().context("failed to load qbank configuration")
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
