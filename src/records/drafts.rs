//! Draft codec: the single `idcardDraft` slot.

use chrono::Utc;

use super::{to_json, Records};
use crate::errors::AppError;
use crate::models::{Draft, SaveDraftRequest};
use crate::store::StoreKey;

impl Records {
    /// Replace the draft slot wholesale. Last write wins.
    pub async fn save_draft(&self, request: SaveDraftRequest) -> Result<Draft, AppError> {
        let id = request
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let uploaded_files_meta = request
            .uploaded_files_meta
            .unwrap_or_else(|| request.form_data.documents.clone());

        let draft = Draft {
            id,
            form_data: request.form_data,
            uploaded_files_meta,
            updated_at: Utc::now().to_rfc3339(),
        };

        self.store
            .set(&StoreKey::Draft.to_string(), &to_json(&draft)?)
            .await?;

        tracing::debug!("Saved draft {}", draft.id);
        Ok(draft)
    }

    /// The stored draft, or `None` when absent or unreadable.
    pub async fn load_draft(&self) -> Option<Draft> {
        self.read_json(&StoreKey::Draft).await
    }

    /// Delete the draft slot. Clearing an empty slot succeeds.
    pub async fn clear_draft(&self) -> Result<(), AppError> {
        self.store.delete(&StoreKey::Draft.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::DateTime;

    use crate::models::{Document, FormValues, SaveDraftRequest};
    use crate::records::Records;
    use crate::store::{MemoryStore, Store};

    fn records() -> (Arc<MemoryStore>, Records) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), Records::new(store))
    }

    fn asha() -> FormValues {
        FormValues {
            employee_name_en: Some("Asha Rao".to_string()),
            department: Some("Operations".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_then_load_draft() {
        let (_, records) = records();
        let before = chrono::Utc::now();

        let saved = records
            .save_draft(SaveDraftRequest::new(asha()))
            .await
            .unwrap();
        let loaded = records.load_draft().await.unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.form_data, asha());
        assert_eq!(
            loaded.form_data.employee_name_en.as_deref(),
            Some("Asha Rao")
        );
        assert!(!loaded.id.is_empty());

        let stamped = DateTime::parse_from_rfc3339(&loaded.updated_at).unwrap();
        assert!(stamped.with_timezone(&chrono::Utc) >= before);
    }

    #[tokio::test]
    async fn test_caller_id_is_kept() {
        let (_, records) = records();
        let request = SaveDraftRequest {
            id: Some("draft-42".to_string()),
            ..SaveDraftRequest::new(asha())
        };

        let saved = records.save_draft(request).await.unwrap();
        assert_eq!(saved.id, "draft-42");
    }

    #[tokio::test]
    async fn test_save_overwrites_without_merge() {
        let (store, records) = records();
        records
            .save_draft(SaveDraftRequest::new(asha()))
            .await
            .unwrap();

        let second = FormValues {
            unit: Some("Loco Shed".to_string()),
            ..Default::default()
        };
        records
            .save_draft(SaveDraftRequest::new(second.clone()))
            .await
            .unwrap();

        let loaded = records.load_draft().await.unwrap();
        assert_eq!(loaded.form_data, second);
        assert!(loaded.form_data.employee_name_en.is_none());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_uploaded_files_default_to_form_documents() {
        let (_, records) = records();
        let values = FormValues {
            documents: vec![Document {
                name: "aadhaar.pdf".to_string(),
                url: None,
            }],
            ..Default::default()
        };

        let saved = records
            .save_draft(SaveDraftRequest::new(values))
            .await
            .unwrap();
        assert_eq!(saved.uploaded_files_meta.len(), 1);
        assert_eq!(saved.uploaded_files_meta[0].name, "aadhaar.pdf");
    }

    #[tokio::test]
    async fn test_clear_draft_twice() {
        let (store, records) = records();
        records
            .save_draft(SaveDraftRequest::new(asha()))
            .await
            .unwrap();

        records.clear_draft().await.unwrap();
        records.clear_draft().await.unwrap();

        assert!(records.load_draft().await.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_draft_is_absent() {
        let (store, records) = records();
        store.set("idcardDraft", "{not json").await.unwrap();
        assert!(records.load_draft().await.is_none());

        store.set("idcardDraft", "[1, 2, 3]").await.unwrap();
        assert!(records.load_draft().await.is_none());
    }

    #[tokio::test]
    async fn test_unavailable_store_reads_absent_and_fails_writes() {
        let (store, records) = records();
        store.set_unavailable(true);

        assert!(records.load_draft().await.is_none());
        assert!(records
            .save_draft(SaveDraftRequest::new(asha()))
            .await
            .is_err());
    }
}
