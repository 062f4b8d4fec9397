//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use tally_config::{ConfigError, TallyConfig};
use tally_core::enums::AnnotationFamily;

fn chain(files: &[&str]) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(TallyConfig::default()));
    for file in files {
        figment = figment.merge(Toml::file(file));
    }
    figment.merge(Env::prefixed("TALLY_").split("__"))
}

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/tally/scan.db"

[histogram]
default_limit = 25
max_limit = 200

[audit]
copyright = true
ip = true
"#,
        )?;

        let config = TallyConfig::from_figment(&chain(&["config.toml"])).expect("config loads");
        assert_eq!(config.database.path, "/var/lib/tally/scan.db");
        assert_eq!(config.histogram.default_limit, 25);
        assert_eq!(config.histogram.max_limit, 200);
        let policy = config.audit.policy();
        assert!(policy.audit_on_update(AnnotationFamily::Copyright));
        assert!(policy.audit_on_update(AnnotationFamily::Ip));
        assert!(!policy.audit_on_update(AnnotationFamily::Ecc));
        Ok(())
    });
}

#[test]
fn project_file_overrides_user_file() {
    Jail::expect_with(|jail| {
        jail.create_file("user.toml", "[histogram]\ndefault_limit = 10\nmax_limit = 100\n")?;
        jail.create_file("project.toml", "[histogram]\ndefault_limit = 20\n")?;

        let config = TallyConfig::from_figment(&chain(&["user.toml", "project.toml"]))
            .expect("config loads");
        assert_eq!(config.histogram.default_limit, 20);
        assert_eq!(config.histogram.max_limit, 100);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[database]\npath = \"from-toml.db\"\n")?;
        jail.set_env("TALLY_DATABASE__PATH", "from-env.db");
        jail.set_env("TALLY_AUDIT__ECC", "true");

        let config = TallyConfig::from_figment(&chain(&["config.toml"])).expect("config loads");
        assert_eq!(config.database.path, "from-env.db");
        assert!(config.audit.ecc);
        Ok(())
    });
}

#[test]
fn out_of_range_limits_are_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[histogram]\ndefault_limit = 500\nmax_limit = 100\n")?;

        let err = TallyConfig::from_figment(&chain(&["config.toml"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "histogram.default_limit"));
        Ok(())
    });
}

#[test]
fn load_reads_project_config_in_cwd() {
    Jail::expect_with(|jail| {
        jail.create_dir(".tally")?;
        jail.create_file(".tally/config.toml", "[database]\npath = \"project.db\"\n")?;

        let config = TallyConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}
