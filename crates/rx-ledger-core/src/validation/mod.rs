//! Validation pipelines for prescriptions and remarks.
//!
//! Pipeline order is fixed; the first failing rule decides the rejection.

mod rules;

pub use rules::*;

use thiserror::Error;

use crate::models::{PrescriptionDetails, RemarkCategory};

/// Reason a submission was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("first and last name must each be 4 to 15 characters")]
    NameLength,

    #[error("address must be at least 20 characters")]
    AddressLength,

    #[error("sphere, cylinder or axis out of range")]
    MeasurementOutOfRange,

    #[error("examination date was not in dd/MM/yy form")]
    InvalidExaminationDate,

    #[error("optometrist name must be 8 to 25 characters")]
    OptometristLength,

    #[error("unknown remark category: {0}")]
    UnknownCategory(String),

    #[error("record already holds the maximum of 2 remarks")]
    RemarkLimitReached,

    #[error("remark has {0} words, expected 6 to 20")]
    WordCount(usize),

    #[error("remark must start with an uppercase letter")]
    NotCapitalized,
}

/// Run the prescription rules in order.
pub fn validate_prescription(details: &PrescriptionDetails) -> Result<(), Rejection> {
    if !name_ok(&details.first_name) || !name_ok(&details.last_name) {
        return Err(Rejection::NameLength);
    }

    if !address_ok(&details.address) {
        return Err(Rejection::AddressLength);
    }

    if !measurements_ok(details.sphere, details.cylinder, details.axis) {
        return Err(Rejection::MeasurementOutOfRange);
    }

    if !details.examination_date.is_valid() {
        return Err(Rejection::InvalidExaminationDate);
    }

    if !optometrist_ok(&details.optometrist) {
        return Err(Rejection::OptometristLength);
    }

    Ok(())
}

/// Run the remark rules in order.
///
/// `accepted` is the number of remarks the record already holds; it is the
/// only record state the remark rules look at.
pub fn validate_remark(
    text: &str,
    category: &str,
    accepted: usize,
) -> Result<RemarkCategory, Rejection> {
    let category = RemarkCategory::parse(category)
        .ok_or_else(|| Rejection::UnknownCategory(category.to_string()))?;

    if accepted >= MAX_REMARKS {
        return Err(Rejection::RemarkLimitReached);
    }

    let words = word_count(text);
    if !REMARK_WORD_COUNT.contains(&words) {
        return Err(Rejection::WordCount(words));
    }

    if !starts_uppercase(text) {
        return Err(Rejection::NotCapitalized);
    }

    Ok(category)
}
