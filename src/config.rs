//! Database configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Result, SchemaError};

const MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Full connection string; takes precedence over `path`.
    pub url: Option<String>,
    /// SQLite file location. Falls back to the platform data directory.
    pub path: Option<PathBuf>,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// Forward sqlx statement logs to the `log` facade.
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            path: None,
            max_connections: 1,
            connect_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// A private in-memory database, gone once the connection closes.
    pub fn in_memory() -> Self {
        Self {
            url: Some(MEMORY_URL.to_string()),
            ..Self::default()
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.as_deref().is_some_and(|url| url.contains(":memory:"))
    }

    /// File the database lives in, if it is file-backed.
    pub fn db_path(&self) -> Result<Option<PathBuf>> {
        if self.url.is_some() {
            return Ok(None);
        }
        match &self.path {
            Some(path) => Ok(Some(path.clone())),
            None => intern_path::get_db_path()
                .map(Some)
                .map_err(SchemaError::Config),
        }
    }

    /// Resolves the sqlx connection string.
    pub fn connection_string(&self) -> Result<String> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }
        let db_path = self
            .db_path()?
            .ok_or_else(|| SchemaError::Config("no database location".to_string()))?;
        let db_url = Url::from_file_path(&db_path).map_err(|_| {
            SchemaError::Config(format!("invalid database path: {}", db_path.display()))
        })?;
        Ok(format!("sqlite:{}?mode=rwc", db_url.path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_url_wins_over_path() {
        let config = DatabaseConfig {
            url: Some("sqlite://custom.db".to_string()),
            path: Some(PathBuf::from("/ignored.db")),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.connection_string().unwrap(), "sqlite://custom.db");
        assert_eq!(config.db_path().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn file_path_becomes_rwc_url() {
        let config = DatabaseConfig::with_path("/var/lib/intern/app.db");
        assert_eq!(
            config.connection_string().unwrap(),
            "sqlite:/var/lib/intern/app.db?mode=rwc"
        );
    }

    #[test]
    fn relative_path_is_rejected() {
        let config = DatabaseConfig::with_path("relative.db");
        assert!(matches!(
            config.connection_string(),
            Err(SchemaError::Config(_))
        ));
    }

    #[test]
    fn in_memory_is_detected() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        assert!(!DatabaseConfig::default().is_in_memory());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: DatabaseConfig =
            serde_json::from_str(r#"{ "path": "/data/intern.db" }"#).unwrap();
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.connect_timeout(), Duration::from_secs(8));
        assert_eq!(config.path, Some(PathBuf::from("/data/intern.db")));
    }
}
