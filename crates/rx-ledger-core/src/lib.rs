//! Rx Ledger Core Library
//!
//! Validation and append-only persistence for optical prescriptions and the
//! remarks attached to them.
//!
//! # Architecture
//!
//! ```text
//! PrescriptionRecord::new(input, sinks)
//!          │
//!          ├── submit_prescription() ──► rules 1..5 ──► format block ──► prescription sink
//!          │
//!          └── submit_remark(text, category)
//!                     │
//!                     └──► category → capacity → word count → casing
//!                                         │
//!                                         ▼
//!                            format block ──► remark sink ──► in-memory remark list
//! ```
//!
//! # Core Principle
//!
//! **The public boundary is a boolean.** Every rejection and every storage
//! fault is reason-coded internally and logged, then collapsed to `false`.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PrescriptionInput, ExaminationDate, Remark, etc.)
//! - [`validation`]: Field rules and the `Rejection` reason codes
//! - [`sink`]: Append-only record sinks (file and in-memory)
//! - [`format`]: Text layout of persisted records
//! - [`record`]: The `PrescriptionRecord` entity
//! - [`config`]: Output locations

pub mod config;
pub mod format;
pub mod models;
pub mod record;
pub mod sink;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigError, LedgerConfig};
pub use models::{
    ExaminationDate, PrescriptionDetails, PrescriptionInput, Remark, RemarkCategory,
};
pub use record::PrescriptionRecord;
pub use sink::{FileSink, MemorySink, RecordSink, RecordSinks, SinkError};
pub use validation::Rejection;

/// Errors surfaced by the `try_*` operations of [`PrescriptionRecord`].
///
/// The boolean operations never return these; they log and return `false`.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Rejected: {0}")]
    Rejected(#[from] Rejection),

    #[error("Storage error: {0}")]
    Storage(#[from] SinkError),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
