use std::path::Path;

use anyhow::Context;
use tally_config::TallyConfig;
use tally_db::service::TallyService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TallyService,
    pub config: TallyConfig,
}

impl AppContext {
    /// Open the annotation store named by `config.database.path`.
    ///
    /// Creates the parent directory of an on-disk store if needed.
    pub async fn init(config: TallyConfig) -> anyhow::Result<Self> {
        let path = config.database.path.as_str();
        if !config.database.is_in_memory() {
            if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }

        let service = TallyService::new_local(path, config.audit.policy())
            .await
            .with_context(|| format!("failed to open annotation store at {path}"))?;
        tracing::debug!(path, policy = ?config.audit.policy(), "application context ready");

        Ok(Self { service, config })
    }
}

#[cfg(test)]
mod tests {
    use tally_config::TallyConfig;
    use tempfile::TempDir;

    use super::AppContext;

    #[tokio::test]
    async fn creates_store_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("tally.db");
        let mut config = TallyConfig::default();
        config.database.path = path.to_string_lossy().into_owned();

        let ctx = AppContext::init(config).await.unwrap();
        assert!(path.exists());
        assert!(ctx.service.policy().copyright);
    }

    #[tokio::test]
    async fn in_memory_store_opens() {
        let mut config = TallyConfig::default();
        config.database.path = ":memory:".into();
        config.audit.ip = true;

        let ctx = AppContext::init(config).await.unwrap();
        assert!(ctx.service.policy().ip);
    }
}
