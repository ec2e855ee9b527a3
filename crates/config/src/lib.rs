//! Configuration loading and validation.
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. built-in defaults,
//! 2. `config.toml` in the platform configuration directory,
//! 3. an explicitly requested file (TOML, YAML or JSON, by extension),
//! 4. `SHELF_*` environment variables.

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use shelf_ledger::ReturnedHistory;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "SHELF_";
const DATABASE_FILE: &str = "library.db";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the SQLite database file.
    pub database: PathBuf,
    /// Whether re-borrowing a book clears it from the returned list.
    pub returned_history: ReturnedHistory,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        let database = project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
            .unwrap_or_else(|| PathBuf::from(DATABASE_FILE));
        Self {
            database,
            returned_history: ReturnedHistory::default(),
            log: "warn".to_string(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shelf")
}

impl Config {
    /// Load configuration from every source.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let default_file = project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE));
        let figment = Self::figment(default_file.as_deref(), explicit)?.merge(Env::prefixed(ENV_PREFIX));
        Self::from_figment(&figment)
    }

    /// Defaults plus file sources, without the environment.
    ///
    /// The default file is optional and silently skipped when missing; an
    /// explicit file must exist.
    pub fn figment(default_file: Option<&Path>, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = default_file {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            if !path.is_file() {
                exn::bail!(ErrorKind::Load);
            }
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file_exact(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
                Some("json") => figment.merge(Json::file_exact(path)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
            };
        }
        Ok(figment)
    }

    /// Extract and validate a configuration.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        tracing::debug!(database = %config.database.display(), returned_history = %config.returned_history, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.as_os_str().is_empty() {
            exn::bail!(ErrorKind::Invalid("database"));
        }
        Ok(())
    }
}
