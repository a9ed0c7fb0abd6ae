//! Remark models.

use serde::{Deserialize, Serialize};

/// Who authored a remark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RemarkCategory {
    Client,
    Optometrist,
}

impl RemarkCategory {
    /// Match a category label case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("client") {
            Some(Self::Client)
        } else if label.eq_ignore_ascii_case("optometrist") {
            Some(Self::Optometrist)
        } else {
            None
        }
    }

    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Optometrist => "optometrist",
        }
    }
}

/// A remark accepted onto a prescription record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Remark {
    /// Remark text exactly as submitted
    pub text: String,
    /// Parsed category
    pub category: RemarkCategory,
}
