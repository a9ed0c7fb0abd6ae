//! Prescription models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pattern used both to parse and to render examination dates (`dd/MM/yy`).
pub const EXAMINATION_DATE_FORMAT: &str = "%d/%m/%y";

/// Raw construction input for a prescription record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionInput {
    /// Patient first name
    pub first_name: String,
    /// Patient last name
    pub last_name: String,
    /// Patient postal address
    pub address: String,
    /// Spherical correction in dioptres
    pub sphere: f32,
    /// Cylindrical correction in dioptres
    pub cylinder: f32,
    /// Cylinder axis in degrees
    pub axis: f32,
    /// Examination date as literal `dd/MM/yy` text
    pub examination_date: String,
    /// Examining optometrist
    pub optometrist: String,
}

/// Examination date as captured at construction time.
///
/// An unparseable input is kept as `Invalid` instead of failing construction;
/// it blocks every later prescription submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExaminationDate {
    Parsed(NaiveDate),
    Invalid,
}

impl ExaminationDate {
    /// Parse `dd/MM/yy` text. Never fails; bad input yields `Invalid`.
    pub fn parse(text: &str) -> Self {
        match NaiveDate::parse_from_str(text, EXAMINATION_DATE_FORMAT) {
            Ok(date) => Self::Parsed(date),
            Err(_) => Self::Invalid,
        }
    }

    /// The parsed date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(date) => Some(*date),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// Render back to `dd/MM/yy`, or `None` for an invalid date.
    pub fn formatted(&self) -> Option<String> {
        self.date().map(|d| d.format(EXAMINATION_DATE_FORMAT).to_string())
    }
}

/// Serializable snapshot of a record's immutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub sphere: f32,
    pub cylinder: f32,
    pub axis: f32,
    pub examination_date: ExaminationDate,
    pub optometrist: String,
}

impl From<PrescriptionInput> for PrescriptionDetails {
    fn from(input: PrescriptionInput) -> Self {
        let examination_date = ExaminationDate::parse(&input.examination_date);
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            address: input.address,
            sphere: input.sphere,
            cylinder: input.cylinder,
            axis: input.axis,
            examination_date,
            optometrist: input.optometrist,
        }
    }
}

impl PrescriptionDetails {
    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
