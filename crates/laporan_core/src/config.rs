//! Run configuration loaded from an optional JSON file.
//!
//! # Invariants
//! - Every field has a default; an empty `{}` file is a valid config.
//! - `validate()` runs on every load.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_COMPANY_NAME: &str = "PT. ALU AKSARA PRATAMA";
pub const DEFAULT_EXTRACTION_ROOT: &str = "temp_images_extracted";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Settings for one report-building run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Company name rendered in the report header.
    pub company_name: String,
    /// Folder recreated on every run to hold extracted images.
    pub extraction_root: PathBuf,
    /// `trace|debug|info|warn|error`; build-mode default when absent.
    pub log_level: Option<String>,
    /// Absolute directory for rolling log files; stderr when absent.
    pub log_dir: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            extraction_root: PathBuf::from(DEFAULT_EXTRACTION_ROOT),
            log_level: None,
            log_dir: None,
        }
    }
}

impl ReportConfig {
    /// Reads and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.company_name.trim().is_empty() {
            return Err(ConfigError::Invalid("company_name must not be empty"));
        }
        if self.extraction_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("extraction_root must not be empty"));
        }
        Ok(())
    }
}
