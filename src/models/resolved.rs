//! Output of the resolution policy.

use serde::{Deserialize, Serialize};

use super::{ApplicationStatus, FormValues};

/// Where a resolved record came from. The serialized label is shown to users.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecordSource {
    #[serde(rename = "per-employee")]
    PerEmployee,
    #[serde(rename = "draft")]
    Draft,
    #[serde(rename = "last-submitted")]
    LastSubmitted,
    #[serde(rename = "example-fallback")]
    ExampleFallback,
}

impl RecordSource {
    pub fn label(&self) -> &'static str {
        match self {
            RecordSource::PerEmployee => "per-employee",
            RecordSource::Draft => "draft",
            RecordSource::LastSubmitted => "last-submitted",
            RecordSource::ExampleFallback => "example-fallback",
        }
    }
}

/// The record surfaced to a form or preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRecord {
    pub source: RecordSource,
    pub id: String,
    pub form_data: FormValues,
    pub status: ApplicationStatus,
    /// `updatedAt` of a draft or `submittedAt` of a submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Set when the last submission belongs to a different employee than requested
    #[serde(default)]
    pub employee_mismatch: bool,
}
