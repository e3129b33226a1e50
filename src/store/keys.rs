//! Typed keys for the record store.
//!
//! The rendered strings are the exact keys used by the browser portal.

use std::fmt;

/// Global draft slot.
pub const DRAFT_KEY: &str = "idcardDraft";
/// Global last-submission slot.
pub const LAST_SUBMITTED_KEY: &str = "lastSubmittedApplication";
/// Prefix of the per-employee form snapshot.
pub const EMPLOYEE_DATA_PREFIX: &str = "idcard_data_";
/// Prefix of the per-employee submitted marker.
pub const EMPLOYEE_SUBMITTED_PREFIX: &str = "idcard_submitted_";
/// Value written under the submitted marker.
pub const SUBMITTED_MARKER: &str = "true";

/// A trimmed, non-empty employee number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeNo(String);

impl EmployeeNo {
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every slot the records layer reads or writes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Draft,
    LastSubmitted,
    EmployeeData(EmployeeNo),
    EmployeeSubmitted(EmployeeNo),
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::Draft => f.write_str(DRAFT_KEY),
            StoreKey::LastSubmitted => f.write_str(LAST_SUBMITTED_KEY),
            StoreKey::EmployeeData(no) => write!(f, "{}{}", EMPLOYEE_DATA_PREFIX, no),
            StoreKey::EmployeeSubmitted(no) => write!(f, "{}{}", EMPLOYEE_SUBMITTED_PREFIX, no),
        }
    }
}
