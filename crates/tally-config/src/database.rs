//! Annotation store location.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from(".tally/tally.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store lives only in memory.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_project_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".tally/tally.db");
        assert!(!config.is_in_memory());
    }
}
