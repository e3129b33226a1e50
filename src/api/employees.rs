//! Per-employee endpoints used by the update flow.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResponse, ApiResult, Navigate, View};
use crate::errors::AppError;
use crate::models::{EmployeeRecord, SaveEmployeeSnapshotRequest};
use crate::store::EmployeeNo;
use crate::AppState;

fn parse_employee_no(raw: &str) -> Result<EmployeeNo, AppError> {
    EmployeeNo::parse(raw)
        .ok_or_else(|| AppError::BadRequest("Employee number is required".to_string()))
}

/// GET /api/employees/{employeeNo} - Per-employee record.
pub async fn get_employee_record(
    State(state): State<AppState>,
    Path(employee_no): Path<String>,
) -> ApiResult<EmployeeRecord> {
    let no = parse_employee_no(&employee_no)?;

    match state.records.load_employee_record(&no).await {
        Some(record) => success(record),
        None => Err(AppError::NotFound(format!(
            "No record for employee {}",
            no
        ))),
    }
}

/// PUT /api/employees/{employeeNo} - Save an update-flow snapshot.
pub async fn save_employee_record(
    State(state): State<AppState>,
    Path(employee_no): Path<String>,
    Json(request): Json<SaveEmployeeSnapshotRequest>,
) -> ApiResult<EmployeeRecord> {
    let no = parse_employee_no(&employee_no)?;
    let mut form_data = request.form_data;

    match form_data.employee_no() {
        Some(in_form) if in_form != no.as_str() => {
            return Err(AppError::BadRequest(format!(
                "Form employee number {} does not match {}",
                in_form, no
            )));
        }
        Some(_) => {}
        None => form_data.employee_no = Some(no.to_string()),
    }

    state.records.save_employee_snapshot(&no, &form_data).await?;

    // Report the marker as stored, the snapshot does not change it
    let record = state
        .records
        .load_employee_record(&no)
        .await
        .unwrap_or(EmployeeRecord {
            employee_no: no.to_string(),
            form_data,
            submitted: false,
        });

    Ok(ApiResponse::new(record).navigate(Navigate::to(View::Dashboard)))
}
