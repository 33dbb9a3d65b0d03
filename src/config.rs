//! Process configuration: layered settings plus database credentials.
//!
//! Settings are resolved from built-in defaults, an optional YAML file and
//! `BLOG_EXPORT_*` environment variables, in increasing priority. The
//! database login always comes from the `dbuser` and `dbpass` variables.

use std::env::{self, VarError};
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::db::DbCredentials;
use crate::services::export::ExportSettings;

/// Default location of the optional settings file.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";
/// Prefix for environment overrides, e.g. `BLOG_EXPORT_OUTPUT_DIR`.
pub const ENV_PREFIX: &str = "BLOG_EXPORT";
pub const DB_USER_VAR: &str = "dbuser";
pub const DB_PASSWORD_VAR: &str = "dbpass";

const DEFAULT_DATABASE_URL: &str = "blog.sqlite3";
const DEFAULT_TEMPLATE_PATH: &str = "templates/jbake_post.html";
const DEFAULT_OUTPUT_DIR: &str = "target/jbakefiles";
const DEFAULT_FILE_EXTENSION: &str = "html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("environment variable `{0}` is not set")]
    MissingCredential(&'static str),
    #[error("environment variable `{0}` is not valid unicode")]
    InvalidCredential(&'static str),
}

/// Settings read from configuration sources.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite URL; `{user}` and `{password}` are replaced with the login.
    pub database_url: String,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub file_extension: String,
}

impl AppConfig {
    /// Load settings using [`DEFAULT_CONFIG_PATH`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load settings, reading `path` if it exists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("template_path", DEFAULT_TEMPLATE_PATH)?
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("file_extension", DEFAULT_FILE_EXTENSION)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Combine with the login into the settings used by an export run.
    pub fn into_export_settings(self, credentials: &DbCredentials) -> ExportSettings {
        ExportSettings {
            database_url: credentials.apply(&self.database_url),
            template_path: self.template_path,
            output_dir: self.output_dir,
            file_extension: self.file_extension,
        }
    }
}

/// Read the database login from `dbuser` and `dbpass`.
pub fn credentials_from_env() -> Result<DbCredentials, ConfigError> {
    credentials_from(|name| env::var(name))
}

/// Read the database login through `lookup`, which behaves like [`env::var`].
pub fn credentials_from<F>(lookup: F) -> Result<DbCredentials, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let read = |name: &'static str| match lookup(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Err(ConfigError::MissingCredential(name)),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidCredential(name)),
    };

    Ok(DbCredentials {
        user: read(DB_USER_VAR)?,
        password: read(DB_PASSWORD_VAR)?,
    })
}
