//! Submission endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use super::{success, ApiResponse, ApiResult, Navigate, PortalQuery, View};
use crate::models::{SubmitRequest, SubmittedApplication};
use crate::AppState;

/// POST /api/submit - Submit the application through the mock service.
pub async fn submit_application(
    State(state): State<AppState>,
    Query(query): Query<PortalQuery>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<SubmittedApplication> {
    let application = state.submit.submit(request.form_data, query.lang()).await?;

    let navigate = Navigate::with_payload(
        View::Preview,
        json!({ "employeeNo": application.employee_no }),
    );
    Ok(ApiResponse::new(application).navigate(navigate))
}

/// GET /api/submissions/last - The last submission, `null` when there is none.
pub async fn get_last_submission(
    State(state): State<AppState>,
) -> ApiResult<Option<SubmittedApplication>> {
    success(state.records.load_last_submitted().await)
}
