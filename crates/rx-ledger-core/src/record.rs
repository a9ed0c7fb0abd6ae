//! The prescription record entity.

use tracing::{debug, error, info};

use crate::format::{format_prescription_block, format_remark_block};
use crate::models::{PrescriptionDetails, PrescriptionInput, Remark};
use crate::sink::RecordSinks;
use crate::validation::{validate_prescription, validate_remark, Rejection};
use crate::{LedgerError, LedgerResult};

/// A prescription plus up to two accepted remarks.
///
/// Fields are fixed at construction; only the remark list grows. Each
/// successful submission appends to the shared sinks, with no deduplication
/// across repeated calls.
#[derive(Debug)]
pub struct PrescriptionRecord {
    details: PrescriptionDetails,
    remarks: Vec<Remark>,
    sinks: RecordSinks,
}

impl PrescriptionRecord {
    /// Create a record. Never fails; a malformed date is kept as
    /// [`ExaminationDate::Invalid`](crate::models::ExaminationDate::Invalid).
    pub fn new(input: PrescriptionInput, sinks: RecordSinks) -> Self {
        let details = PrescriptionDetails::from(input);
        if !details.examination_date.is_valid() {
            debug!(
                first_name = %details.first_name,
                last_name = %details.last_name,
                "examination date did not parse, prescription cannot be submitted"
            );
        }
        Self {
            details,
            remarks: Vec::new(),
            sinks,
        }
    }

    pub fn details(&self) -> &PrescriptionDetails {
        &self.details
    }

    /// Accepted remarks, oldest first.
    pub fn remarks(&self) -> &[Remark] {
        &self.remarks
    }

    /// Validate and append the prescription.
    pub fn try_submit_prescription(&self) -> LedgerResult<()> {
        validate_prescription(&self.details)?;

        let block = format_prescription_block(&self.details)
            .ok_or(Rejection::InvalidExaminationDate)?;
        self.sinks.prescriptions.append(&block)?;

        info!(
            first_name = %self.details.first_name,
            last_name = %self.details.last_name,
            "prescription recorded"
        );
        Ok(())
    }

    /// Validate and append the prescription; `false` on any failure.
    pub fn submit_prescription(&self) -> bool {
        let result = self.try_submit_prescription();
        report("prescription", result)
    }

    /// Validate and append a remark, then remember it.
    ///
    /// A remark whose append fails is not remembered and does not count
    /// toward the limit.
    pub fn try_submit_remark(&mut self, text: &str, category: &str) -> LedgerResult<()> {
        let parsed = validate_remark(text, category, self.remarks.len())?;

        self.sinks
            .remarks
            .append(&format_remark_block(text, category))?;

        self.remarks.push(Remark {
            text: text.to_string(),
            category: parsed,
        });

        info!(
            category = parsed.as_str(),
            count = self.remarks.len(),
            "remark recorded"
        );
        Ok(())
    }

    /// Validate and append a remark; `false` on any failure.
    pub fn submit_remark(&mut self, text: &str, category: &str) -> bool {
        let result = self.try_submit_remark(text, category);
        report("remark", result)
    }
}

/// Collapse a submission result to the boolean contract, logging the reason.
fn report(kind: &str, result: LedgerResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(LedgerError::Rejected(reason)) => {
            debug!(kind, %reason, "submission rejected");
            false
        }
        Err(LedgerError::Storage(e)) => {
            error!(kind, error = %e, "failed to append record");
            false
        }
    }
}
