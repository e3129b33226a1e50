//! Submission models: the global last submission and per-employee records.

use serde::{Deserialize, Serialize};

use super::FormValues;

/// Lifecycle status of an application.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApplicationStatus {
    Draft,
    Submitted,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "Draft",
            ApplicationStatus::Submitted => "Submitted",
        }
    }
}

/// A finalized application produced by the mock submit service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub id: String,
    pub form_data: FormValues,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub employee_no: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: String,
}

/// Snapshot stored under the per-employee keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub employee_no: String,
    pub form_data: FormValues,
    /// Whether `idcard_submitted_{employeeNo}` is set
    pub submitted: bool,
}

/// Request body for submitting an application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub form_data: FormValues,
}

/// Request body for the update flow's per-employee snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEmployeeSnapshotRequest {
    #[serde(default)]
    pub form_data: FormValues,
}
