//! Mock submit service: emulates a slow server accepting an application.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::errors::AppError;
use crate::i18n::{Lang, Message};
use crate::models::{FormValues, SubmittedApplication};
use crate::records::Records;
use crate::validation::ensure_valid;

/// In-flight key used when the form carries no employee number.
const GLOBAL_FORM: &str = "__global__";

/// Accepts submissions after an artificial delay.
pub struct SubmitService {
    records: Records,
    delay: Duration,
    simulate_failure: AtomicBool,
    in_flight: Mutex<HashSet<String>>,
}

impl SubmitService {
    pub fn new(records: Records, delay: Duration, simulate_failure: bool) -> Self {
        Self {
            records,
            delay,
            simulate_failure: AtomicBool::new(simulate_failure),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Route subsequent submissions through the failure path.
    pub fn set_simulated_failure(&self, fail: bool) {
        self.simulate_failure.store(fail, Ordering::SeqCst);
    }

    /// Whether a submission for this form is currently waiting out the delay.
    pub fn is_in_flight(&self, form_data: &FormValues) -> bool {
        let key = form_key(form_data);
        self.in_flight
            .lock()
            .map(|set| set.contains(&key))
            .unwrap_or(false)
    }

    /// Validate, wait, then commit the submission and drop the draft.
    ///
    /// Validation failures and the simulated failure path leave storage untouched.
    pub async fn submit(
        &self,
        form_data: FormValues,
        lang: Lang,
    ) -> Result<SubmittedApplication, AppError> {
        ensure_valid(&form_data, lang)?;

        let _guard = InFlightGuard::acquire(&self.in_flight, form_key(&form_data), lang)?;

        tracing::debug!("Submitting application, simulated latency {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        if self.simulate_failure.load(Ordering::SeqCst) {
            tracing::warn!("Simulated submission failure, draft left intact");
            return Err(AppError::SubmissionFailed(
                Message::SubmissionFailed.text(lang).to_string(),
            ));
        }

        self.records.commit_submission(form_data).await
    }
}

fn form_key(form_data: &FormValues) -> String {
    form_data
        .employee_no()
        .unwrap_or(GLOBAL_FORM)
        .to_string()
}

/// Marks a form as submitting until dropped.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<String>>,
    key: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<String>>, key: String, lang: Lang) -> Result<Self, AppError> {
        let mut active = set
            .lock()
            .map_err(|_| AppError::Internal("Submission tracker poisoned".to_string()))?;
        if !active.insert(key.clone()) {
            return Err(AppError::Conflict(
                Message::SubmissionInProgress.text(lang).to_string(),
            ));
        }
        Ok(Self { set, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut active) = self.set.lock() {
            active.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{ApplicationStatus, SaveDraftRequest};
    use crate::store::{MemoryStore, Store};

    fn valid(employee_no: Option<&str>) -> FormValues {
        FormValues {
            employee_name_en: Some("Asha Rao".to_string()),
            employee_no: employee_no.map(str::to_string),
            designation_en: Some("Station Master".to_string()),
            department: Some("Operations".to_string()),
            mobile_number: Some("9812345670".to_string()),
            date_of_birth: Some("1990-02-11".to_string()),
            ..Default::default()
        }
    }

    fn service(delay_ms: u64) -> (Arc<MemoryStore>, Arc<SubmitService>) {
        let store = Arc::new(MemoryStore::new());
        let records = Records::new(store.clone());
        let service = SubmitService::new(records, Duration::from_millis(delay_ms), false);
        (store, Arc::new(service))
    }

    #[tokio::test]
    async fn test_submit_clears_draft_and_marks_employee() {
        let (store, service) = service(5);
        service
            .records()
            .save_draft(SaveDraftRequest::new(valid(Some("EMP001"))))
            .await
            .unwrap();

        let app = service
            .submit(valid(Some("EMP001")), Lang::En)
            .await
            .unwrap();

        assert_eq!(app.status, ApplicationStatus::Submitted);
        assert_eq!(app.employee_no.as_deref(), Some("EMP001"));
        assert!(service.records().load_draft().await.is_none());

        let last = service.records().load_last_submitted().await.unwrap();
        assert_eq!(last.form_data, valid(Some("EMP001")));
        assert_eq!(last.status, ApplicationStatus::Submitted);
        assert_eq!(
            store.get("idcard_submitted_EMP001").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_validation_failure_does_not_touch_storage() {
        let (store, service) = service(5);
        service
            .records()
            .save_draft(SaveDraftRequest::new(FormValues::default()))
            .await
            .unwrap();

        let err = service
            .submit(FormValues::default(), Lang::En)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(service.records().load_draft().await.is_some());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_simulated_failure_keeps_draft() {
        let (_, service) = service(5);
        let draft = service
            .records()
            .save_draft(SaveDraftRequest::new(valid(None)))
            .await
            .unwrap();
        service.set_simulated_failure(true);

        let err = service.submit(valid(None), Lang::Hi).await.unwrap_err();
        assert_eq!(err.error_code(), "SUBMISSION_FAILED");
        assert_eq!(err.message(), "आवेदन जमा नहीं हो सका। कृपया पुनः प्रयास करें।");
        assert_eq!(service.records().load_draft().await.unwrap(), draft);
        assert!(service.records().load_last_submitted().await.is_none());

        // Retry succeeds once the failure clears
        service.set_simulated_failure(false);
        service.submit(valid(None), Lang::En).await.unwrap();
        assert!(service.records().load_draft().await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_submit_rejected_while_in_flight() {
        let (_, service) = service(200);

        let first = {
            let service = service.clone();
            tokio::spawn(async move { service.submit(valid(Some("EMP002")), Lang::En).await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(service.is_in_flight(&valid(Some("EMP002"))));

        let err = service
            .submit(valid(Some("EMP002")), Lang::En)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        first.await.unwrap().unwrap();
        assert!(!service.is_in_flight(&valid(Some("EMP002"))));
    }

    #[tokio::test]
    async fn test_submit_waits_for_delay() {
        let (_, service) = service(100);
        let started = std::time::Instant::now();
        service.submit(valid(None), Lang::En).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
