//! Draft model: an unsubmitted, locally saved snapshot of a form.

use serde::{Deserialize, Serialize};

use super::{Document, FormValues};

/// The single in-progress draft stored under `idcardDraft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: String,
    pub form_data: FormValues,
    #[serde(default)]
    pub uploaded_files_meta: Vec<Document>,
    pub updated_at: String,
}

/// Request body for saving a draft.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDraftRequest {
    /// Existing draft identifier; a fresh one is generated when absent
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub form_data: FormValues,
    /// Defaults to the form's own document list
    #[serde(default)]
    pub uploaded_files_meta: Option<Vec<Document>>,
}

impl SaveDraftRequest {
    pub fn new(form_data: FormValues) -> Self {
        Self {
            form_data,
            ..Default::default()
        }
    }
}
