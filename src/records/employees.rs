//! Per-employee records written by the update flow and on submission.

use serde::Deserialize;

use super::{to_json, Records};
use crate::errors::AppError;
use crate::models::{EmployeeRecord, FormValues};
use crate::store::{EmployeeNo, StoreKey, SUBMITTED_MARKER};

/// `idcard_data_*` holds either the raw form or a `{ formData }` wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEmployeeData {
    Wrapped {
        #[serde(rename = "formData")]
        form_data: FormValues,
    },
    Raw(FormValues),
}

impl StoredEmployeeData {
    fn into_form(self) -> FormValues {
        match self {
            StoredEmployeeData::Wrapped { form_data } => form_data,
            StoredEmployeeData::Raw(form_data) => form_data,
        }
    }
}

impl Records {
    /// The per-employee snapshot, or `None` when absent or unreadable.
    pub async fn load_employee_record(&self, employee_no: &EmployeeNo) -> Option<EmployeeRecord> {
        let data: StoredEmployeeData = self
            .read_json(&StoreKey::EmployeeData(employee_no.clone()))
            .await?;
        let submitted = self
            .read_raw(&StoreKey::EmployeeSubmitted(employee_no.clone()))
            .await
            .is_some_and(|marker| marker == SUBMITTED_MARKER);

        Some(EmployeeRecord {
            employee_no: employee_no.to_string(),
            form_data: data.into_form(),
            submitted,
        })
    }

    /// Store an update-flow snapshot. The submitted marker is left as is.
    pub async fn save_employee_snapshot(
        &self,
        employee_no: &EmployeeNo,
        form_data: &FormValues,
    ) -> Result<(), AppError> {
        let key = StoreKey::EmployeeData(employee_no.clone());
        self.store.set(&key.to_string(), &to_json(form_data)?).await?;
        tracing::debug!("Saved snapshot for employee {}", employee_no);
        Ok(())
    }
}
