//! Domain models for the prescription ledger.

mod prescription;
mod remark;

pub use prescription::*;
pub use remark::*;
