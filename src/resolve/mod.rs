//! Resolution policy: which stored record a form or preview starts from.
//!
//! Precedence, first match wins: per-employee record, global draft, last
//! submission, built-in example. Never fails.

mod example;

pub use example::{example_record, EXAMPLE_EMPLOYEE_NO, EXAMPLE_NAME};

use crate::models::{ApplicationStatus, RecordSource, ResolvedRecord};
use crate::records::Records;
use crate::store::EmployeeNo;

impl Records {
    /// Resolve the record to show for `requested` (an employee number, if known).
    pub async fn resolve(&self, requested: Option<&str>) -> ResolvedRecord {
        let requested = requested.and_then(EmployeeNo::parse);

        if let Some(no) = &requested {
            if let Some(record) = self.load_employee_record(no).await {
                let status = if record.submitted {
                    ApplicationStatus::Submitted
                } else {
                    ApplicationStatus::Draft
                };
                return ResolvedRecord {
                    source: RecordSource::PerEmployee,
                    id: record.employee_no,
                    form_data: record.form_data,
                    status,
                    timestamp: None,
                    employee_mismatch: false,
                };
            }
        }

        if let Some(draft) = self.load_draft().await {
            return ResolvedRecord {
                source: RecordSource::Draft,
                id: draft.id,
                form_data: draft.form_data,
                status: ApplicationStatus::Draft,
                timestamp: Some(draft.updated_at),
                employee_mismatch: false,
            };
        }

        if let Some(submission) = self.load_last_submitted().await {
            // The global slot is not scoped per employee; flag, don't reconcile.
            let employee_mismatch = match (&requested, submission.employee_no.as_deref()) {
                (Some(no), Some(stored)) => no.as_str() != stored.trim(),
                (Some(_), None) => true,
                (None, _) => false,
            };
            if employee_mismatch {
                tracing::warn!(
                    "Last submission {} does not belong to requested employee {}",
                    submission.id,
                    requested.as_ref().map(|no| no.as_str()).unwrap_or_default()
                );
            }
            return ResolvedRecord {
                source: RecordSource::LastSubmitted,
                id: submission.id,
                form_data: submission.form_data,
                status: submission.status,
                timestamp: Some(submission.submitted_at),
                employee_mismatch,
            };
        }

        tracing::debug!("No stored record, using example fallback");
        example_record(requested.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::models::{ApplicationStatus, FormValues, RecordSource, SaveDraftRequest};
    use crate::records::Records;
    use crate::store::{EmployeeNo, MemoryStore, Store};

    fn named(name: &str, employee_no: Option<&str>) -> FormValues {
        FormValues {
            employee_name_en: Some(name.to_string()),
            employee_no: employee_no.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_per_employee_wins_over_everything() {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());

        records
            .commit_submission(named("Submitted Self", Some("EMP001")))
            .await
            .unwrap();
        records
            .save_employee_snapshot(
                &EmployeeNo::parse("EMP001").unwrap(),
                &named("Snapshot Self", Some("EMP001")),
            )
            .await
            .unwrap();
        records
            .save_draft(SaveDraftRequest::new(named("Draft Self", Some("EMP001"))))
            .await
            .unwrap();

        let resolved = records.resolve(Some("EMP001")).await;
        assert_eq!(resolved.source, RecordSource::PerEmployee);
        assert_eq!(resolved.source.label(), "per-employee");
        assert_eq!(
            resolved.form_data.employee_name_en.as_deref(),
            Some("Snapshot Self")
        );
        assert_eq!(resolved.status, ApplicationStatus::Submitted);
    }

    #[tokio::test]
    async fn test_draft_then_last_submitted() {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());

        records
            .commit_submission(named("Old Submit", None))
            .await
            .unwrap();
        records
            .save_draft(SaveDraftRequest::new(named("Fresh Draft", None)))
            .await
            .unwrap();

        let resolved = records.resolve(None).await;
        assert_eq!(resolved.source, RecordSource::Draft);
        assert_eq!(resolved.status, ApplicationStatus::Draft);

        records.clear_draft().await.unwrap();
        let resolved = records.resolve(None).await;
        assert_eq!(resolved.source, RecordSource::LastSubmitted);
        assert_eq!(
            resolved.form_data.employee_name_en.as_deref(),
            Some("Old Submit")
        );
        assert!(!resolved.employee_mismatch);
    }

    #[tokio::test]
    async fn test_mismatched_last_submission_is_flagged() {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());
        records
            .commit_submission(named("Other Person", Some("EMP777")))
            .await
            .unwrap();

        let resolved = records.resolve(Some("EMP001")).await;
        assert_eq!(resolved.source, RecordSource::LastSubmitted);
        assert!(resolved.employee_mismatch);
    }

    #[tokio::test]
    async fn test_fallback_to_example() {
        let records = Records::new(Arc::new(MemoryStore::new()));

        let resolved = records.resolve(None).await;
        assert_eq!(resolved.source, RecordSource::ExampleFallback);
        assert_eq!(resolved.source.label(), "example-fallback");
        assert_eq!(resolved.form_data.employee_no.as_deref(), Some("EMP001"));
    }

    #[tokio::test]
    async fn test_example_for_unknown_employee() {
        let records = Records::new(Arc::new(MemoryStore::new()));

        let resolved = records.resolve(Some("EMP001")).await;
        assert_eq!(resolved.source, RecordSource::ExampleFallback);
        assert_eq!(resolved.status, ApplicationStatus::Submitted);
        assert_eq!(resolved.form_data.employee_no.as_deref(), Some("EMP001"));
        assert_eq!(
            resolved.form_data.employee_name_en.as_deref(),
            Some("John Doe")
        );
    }

    #[tokio::test]
    async fn test_corrupt_slots_degrade_to_next_rule() {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());
        store.set("idcard_data_EMP5", "garbage").await.unwrap();
        store.set("idcardDraft", "{\"id\":").await.unwrap();
        store.set("lastSubmittedApplication", "null").await.unwrap();

        let resolved = records.resolve(Some("EMP5")).await;
        assert_eq!(resolved.source, RecordSource::ExampleFallback);
        assert_eq!(resolved.form_data.employee_no.as_deref(), Some("EMP5"));
    }

    #[tokio::test]
    async fn test_unavailable_store_resolves_to_example() {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());
        records
            .save_draft(SaveDraftRequest::new(named("Hidden", None)))
            .await
            .unwrap();
        store.set_unavailable(true);

        let resolved = records.resolve(None).await;
        assert_eq!(resolved.source, RecordSource::ExampleFallback);
    }
}
