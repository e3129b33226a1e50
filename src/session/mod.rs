//! Per-form-session state machine.
//!
//! `Editing -> Saving -> Editing` loops until `Editing -> Submitting ->
//! Submitted`. `Submitted` is terminal; a failed submit returns to `Editing`.

use serde::Serialize;

use crate::errors::AppError;
use crate::i18n::Lang;
use crate::models::{Draft, FormValues, RecordSource, SaveDraftRequest, SubmittedApplication};
use crate::records::Records;
use crate::submit::SubmitService;

/// Where a form session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    Editing,
    Saving,
    Submitting,
    Submitted,
}

/// One user's pass through the application form.
#[derive(Debug)]
pub struct FormSession {
    state: SessionState,
    values: FormValues,
    source: RecordSource,
    draft_id: Option<String>,
    submitted: Option<SubmittedApplication>,
}

impl FormSession {
    /// Open a session seeded from the resolution policy.
    pub async fn open(records: &Records, employee_no: Option<&str>) -> Self {
        let resolved = records.resolve(employee_no).await;
        let draft_id = (resolved.source == RecordSource::Draft).then(|| resolved.id.clone());
        Self {
            state: SessionState::Editing,
            values: resolved.form_data,
            source: resolved.source,
            draft_id,
            submitted: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The record the session was seeded from.
    pub fn source(&self) -> RecordSource {
        self.source
    }

    pub fn submitted(&self) -> Option<&SubmittedApplication> {
        self.submitted.as_ref()
    }

    /// Apply a local edit. Only allowed while editing.
    pub fn edit(&mut self, change: impl FnOnce(&mut FormValues)) -> Result<(), AppError> {
        self.expect_editing("edit")?;
        change(&mut self.values);
        Ok(())
    }

    /// Persist the current values as the draft and keep editing.
    pub async fn save_draft(&mut self, records: &Records) -> Result<Draft, AppError> {
        self.expect_editing("save a draft")?;
        self.state = SessionState::Saving;

        let request = SaveDraftRequest {
            id: self.draft_id.clone(),
            ..SaveDraftRequest::new(self.values.clone())
        };
        let result = records.save_draft(request).await;
        self.state = SessionState::Editing;

        let draft = result?;
        self.draft_id = Some(draft.id.clone());
        Ok(draft)
    }

    /// Submit the current values. Success ends the session.
    pub async fn submit(
        &mut self,
        service: &SubmitService,
        lang: Lang,
    ) -> Result<SubmittedApplication, AppError> {
        self.expect_editing("submit")?;
        self.state = SessionState::Submitting;

        match service.submit(self.values.clone(), lang).await {
            Ok(application) => {
                self.state = SessionState::Submitted;
                self.draft_id = None;
                self.submitted = Some(application.clone());
                Ok(application)
            }
            Err(e) => {
                self.state = SessionState::Editing;
                Err(e)
            }
        }
    }

    fn expect_editing(&self, action: &str) -> Result<(), AppError> {
        match self.state {
            SessionState::Editing => Ok(()),
            state => Err(AppError::Conflict(format!(
                "Cannot {} while the form is {:?}",
                action, state
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::store::MemoryStore;

    fn setup() -> (Records, SubmitService) {
        let records = Records::new(Arc::new(MemoryStore::new()));
        let service = SubmitService::new(records.clone(), Duration::from_millis(5), false);
        (records, service)
    }

    fn fill(values: &mut FormValues) {
        values.employee_name_en = Some("Asha Rao".to_string());
        values.employee_no = Some("EMP321".to_string());
        values.designation_en = Some("Station Master".to_string());
        values.department = Some("Operations".to_string());
        values.mobile_number = Some("9812345670".to_string());
        values.date_of_birth = Some("1990-02-11".to_string());
        values.date_of_appointment = None;
    }

    #[tokio::test]
    async fn test_new_session_starts_from_example() {
        let (records, _) = setup();
        let session = FormSession::open(&records, None).await;
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.source(), RecordSource::ExampleFallback);
    }

    #[tokio::test]
    async fn test_save_loop_reuses_draft_id() {
        let (records, _) = setup();
        let mut session = FormSession::open(&records, None).await;

        let first = session.save_draft(&records).await.unwrap();
        session
            .edit(|v| v.unit = Some("Carriage Depot".to_string()))
            .unwrap();
        let second = session.save_draft(&records).await.unwrap();

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(first.id, second.id);
        assert_eq!(
            records.load_draft().await.unwrap().form_data.unit.as_deref(),
            Some("Carriage Depot")
        );

        // A reopened session picks the draft up again
        let reopened = FormSession::open(&records, None).await;
        assert_eq!(reopened.source(), RecordSource::Draft);
        assert_eq!(reopened.values().unit.as_deref(), Some("Carriage Depot"));
    }

    #[tokio::test]
    async fn test_submitted_is_terminal() {
        let (records, service) = setup();
        let mut session = FormSession::open(&records, None).await;
        session.edit(fill).unwrap();
        session.save_draft(&records).await.unwrap();

        let application = session.submit(&service, Lang::En).await.unwrap();
        assert_eq!(session.state(), SessionState::Submitted);
        assert_eq!(session.submitted(), Some(&application));
        assert!(records.load_draft().await.is_none());

        assert!(session.edit(|v| v.notes = None).is_err());
        assert!(session.save_draft(&records).await.is_err());
        assert!(matches!(
            session.submit(&service, Lang::En).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_submit_returns_to_editing() {
        let (records, service) = setup();
        let mut session = FormSession::open(&records, None).await;
        session.edit(|v| *v = FormValues::default()).unwrap();

        assert!(session.submit(&service, Lang::En).await.is_err());
        assert_eq!(session.state(), SessionState::Editing);

        session.edit(fill).unwrap();
        session.submit(&service, Lang::En).await.unwrap();
        assert_eq!(session.state(), SessionState::Submitted);
    }
}
