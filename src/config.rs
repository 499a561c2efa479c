//! Configuration file handling for database connections.
//!
//! This module loads the optional `.hospital_db.json` file and merges it with
//! the command line and environment into one [`ConnectionConfig`].
//!
//! ```json
//! {
//!   "database": {
//!     "host": "db.internal",
//!     "password": "secret"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::cli::Args;
use crate::db::{ConnectionConfig, DEFAULT_HOST};

/// Environment variable consulted for the password.
pub const PASSWORD_ENV: &str = "HOSPITAL_DB_PASSWORD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Connection settings the file may supply. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub password: Option<String>,
}

impl ConfigFile {
    /// Load the config file at `path`. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid JSON of the expected shape.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }
}

/// Merge the sources in precedence order: flag, file, environment, default.
pub fn resolve(args: &Args, file: Option<&ConfigFile>, env_password: Option<String>) -> ConnectionConfig {
    let settings = file.map(|f| &f.database);

    let host = args
        .host
        .clone()
        .or_else(|| settings.and_then(|s| s.host.clone()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let password = settings
        .and_then(|s| s.password.clone())
        .or(env_password)
        .unwrap_or_default();

    ConnectionConfig {
        host,
        port: args.port,
        database: args.database.clone(),
        user: args.user.clone(),
        password,
    }
}
