//! TOML configuration with defaults.
//!
//! Loaded from `~/.config/ev-roaming-mock/config.toml` unless the
//! `EVROAM_CONFIG` environment variable points elsewhere; any load failure
//! falls back to defaults so the mock stays usable out of the box.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub fixtures: FixturesConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// Directory holding the `<key>.json` fixture documents.
    pub dir: PathBuf,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fixtures"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ev-roaming-mock")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.address(), "0.0.0.0:8000");
        assert_eq!(cfg.fixtures.dir, PathBuf::from("fixtures"));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_toml_keeps_defaults_for_the_rest() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9100

            [fixtures]
            dir = "/srv/fixtures"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.fixtures.dir, PathBuf::from("/srv/fixtures"));
        assert_eq!(cfg.logging.level, "info");
    }
}
