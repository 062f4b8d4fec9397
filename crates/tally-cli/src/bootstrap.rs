use tally_config::TallyConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<TallyConfig> {
    let mut config = TallyConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut TallyConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.db {
        tracing::debug!(path, "database path overridden on the command line");
        config.database.path.clone_from(path);
    }
}

#[cfg(test)]
mod tests {
    use super::apply_overrides;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use tally_config::TallyConfig;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            color: ColorMode::Never,
            db: db.map(str::to_string),
            actor: None,
        }
    }

    #[test]
    fn db_flag_replaces_configured_path() {
        let mut config = TallyConfig::default();
        apply_overrides(&mut config, &flags(Some("/tmp/scan.db")));
        assert_eq!(config.database.path, "/tmp/scan.db");
    }

    #[test]
    fn no_flag_keeps_configured_path() {
        let mut config = TallyConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, ".tally/tally.db");
    }
}
