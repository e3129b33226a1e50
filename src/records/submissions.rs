//! Submission codec: the global last-submission slot plus per-employee writes.

use chrono::Utc;

use super::{to_json, Records};
use crate::errors::AppError;
use crate::models::{ApplicationStatus, FormValues, SubmittedApplication};
use crate::store::{EmployeeNo, StoreKey, StoreOp, SUBMITTED_MARKER};

impl Records {
    /// The last submission, or `None` when absent or unreadable.
    pub async fn load_last_submitted(&self) -> Option<SubmittedApplication> {
        self.read_json(&StoreKey::LastSubmitted).await
    }

    /// Stamp and persist a submission, then drop the draft.
    ///
    /// All writes go through one batch: if the store rejects it, nothing
    /// changes and the draft is still there for a retry.
    pub async fn commit_submission(
        &self,
        form_data: FormValues,
    ) -> Result<SubmittedApplication, AppError> {
        let employee_no = form_data.employee_no().and_then(EmployeeNo::parse);
        let id = employee_no
            .as_ref()
            .map(|no| no.to_string())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let application = SubmittedApplication {
            id,
            name: form_data.display_name().map(str::to_string),
            employee_no: employee_no.as_ref().map(|no| no.to_string()),
            department: form_data.department.clone(),
            form_data,
            status: ApplicationStatus::Submitted,
            submitted_at: Utc::now().to_rfc3339(),
        };

        let mut ops = vec![StoreOp::set(
            &StoreKey::LastSubmitted,
            to_json(&application)?,
        )];
        if let Some(no) = &employee_no {
            ops.push(StoreOp::set(
                &StoreKey::EmployeeData(no.clone()),
                to_json(&application.form_data)?,
            ));
            ops.push(StoreOp::set(
                &StoreKey::EmployeeSubmitted(no.clone()),
                SUBMITTED_MARKER,
            ));
        }
        ops.push(StoreOp::delete(&StoreKey::Draft));

        self.store.apply(ops).await?;

        tracing::info!(
            "Committed submission {} (employee: {})",
            application.id,
            application.employee_no.as_deref().unwrap_or("none")
        );
        Ok(application)
    }
}
