//! Append-only record sinks.
//!
//! A sink accepts whole formatted text blocks. Sinks are shared across
//! records and carry no locking across appends; concurrent writers may
//! interleave.

mod file;
mod memory;

pub use file::*;
pub use memory::*;

use std::sync::Arc;

use thiserror::Error;

use crate::config::LedgerConfig;

/// Sink errors.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<std::sync::PoisonError<T>> for SinkError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        SinkError::Unavailable(format!("Lock poisoned: {}", e))
    }
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Destination for formatted records.
pub trait RecordSink: Send + Sync {
    /// Append one formatted record. No partial-write protection.
    fn append(&self, record: &str) -> SinkResult<()>;
}

/// The pair of stores a prescription record writes to.
#[derive(Clone)]
pub struct RecordSinks {
    pub prescriptions: Arc<dyn RecordSink>,
    pub remarks: Arc<dyn RecordSink>,
}

impl RecordSinks {
    pub fn new(prescriptions: Arc<dyn RecordSink>, remarks: Arc<dyn RecordSink>) -> Self {
        Self {
            prescriptions,
            remarks,
        }
    }

    /// File sinks at the configured locations.
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(
            Arc::new(FileSink::new(&config.prescription_path)),
            Arc::new(FileSink::new(&config.remark_path)),
        )
    }
}

impl std::fmt::Debug for RecordSinks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSinks").finish_non_exhaustive()
    }
}
