//! Output locations for the two record stores.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where prescriptions and remarks are appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Prescription store, relative to the working directory by default
    pub prescription_path: PathBuf,
    /// Remark store
    pub remark_path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            prescription_path: PathBuf::from("presc.txt"),
            remark_path: PathBuf::from("remark.txt"),
        }
    }
}

impl LedgerConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
