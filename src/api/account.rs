//! Account endpoints (mocked).

use axum::{
    extract::{Query, State},
    Json,
};

use super::{ApiResponse, ApiResult, Navigate, PortalQuery, View};
use crate::models::{ChangePasswordRequest, PasswordChanged};
use crate::AppState;

/// POST /api/account/password - Change the mocked account password.
pub async fn change_password(
    State(state): State<AppState>,
    Query(query): Query<PortalQuery>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<PasswordChanged> {
    let changed = state
        .account
        .change_password(&request, query.lang())
        .await?;
    Ok(ApiResponse::new(changed).navigate(Navigate::to(View::Dashboard)))
}
