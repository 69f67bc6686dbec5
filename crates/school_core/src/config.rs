//! Runtime configuration for school collaborators.
//!
//! # Responsibility
//! - Read store and logging settings from `SCHOOL_*` environment variables.
//! - Map settings to a `StoreLocation`.
//!
//! # Invariants
//! - Empty variables are treated as unset.
//! - A configured log level is always one of trace|debug|info|warn|error.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use crate::store::StoreLocation;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "SCHOOL_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "SCHOOL_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "SCHOOL_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolConfig {
    /// Database file; `None` selects an in-memory store.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub source: LoggingError,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {}", self.variable, self.source)
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl SchoolConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds a config from `(name, value)` pairs; unknown names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in vars {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match name.as_ref() {
                ENV_DB_PATH => config.db_path = Some(PathBuf::from(value)),
                ENV_LOG_LEVEL => config.set_log_level(value)?,
                ENV_LOG_DIR => config.set_log_dir(value)?,
                _ => {}
            }
        }
        Ok(config)
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), ConfigError> {
        let level = normalize_level(level).map_err(|source| ConfigError {
            variable: ENV_LOG_LEVEL,
            source,
        })?;
        self.log_level = level.to_string();
        Ok(())
    }

    pub fn set_log_dir(&mut self, log_dir: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let log_dir = normalize_log_dir(&log_dir.into()).map_err(|source| ConfigError {
            variable: ENV_LOG_DIR,
            source,
        })?;
        self.log_dir = Some(log_dir);
        Ok(())
    }

    pub fn store_location(&self) -> StoreLocation {
        match &self.db_path {
            Some(path) => StoreLocation::File(path.clone()),
            None => StoreLocation::Memory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SchoolConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use crate::store::StoreLocation;
    use std::path::PathBuf;

    #[test]
    fn empty_environment_selects_memory_store() {
        let config = SchoolConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.store_location(), StoreLocation::Memory);
        assert_eq!(config.log_level, default_log_level());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn variables_are_read_and_normalized() {
        let config = SchoolConfig::from_vars([
            (ENV_DB_PATH, "/var/lib/school/school.db"),
            (ENV_LOG_LEVEL, " Warning "),
            (ENV_LOG_DIR, "/var/log/school"),
            ("UNRELATED", "x"),
        ])
        .unwrap();

        assert_eq!(
            config.store_location(),
            StoreLocation::File(PathBuf::from("/var/lib/school/school.db"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/school")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = SchoolConfig::from_vars([(ENV_DB_PATH, "  "), (ENV_LOG_LEVEL, "")]).unwrap();
        assert!(config.db_path.is_none());
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = SchoolConfig::from_vars([(ENV_LOG_LEVEL, "loud")]).unwrap_err();
        assert_eq!(err.variable, ENV_LOG_LEVEL);
        assert!(err.to_string().contains("SCHOOL_LOG_LEVEL"));

        let err = SchoolConfig::from_vars([(ENV_LOG_DIR, "relative/logs")]).unwrap_err();
        assert_eq!(err.variable, ENV_LOG_DIR);
    }
}
