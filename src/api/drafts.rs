//! Draft endpoints.

use axum::{extract::State, Json};

use super::{success, ApiResponse, ApiResult, Navigate, View};
use crate::models::{Draft, SaveDraftRequest};
use crate::AppState;

/// GET /api/draft - The saved draft, `null` when there is none.
pub async fn get_draft(State(state): State<AppState>) -> ApiResult<Option<Draft>> {
    success(state.records.load_draft().await)
}

/// PUT /api/draft - Save progress without submitting.
pub async fn save_draft(
    State(state): State<AppState>,
    Json(request): Json<SaveDraftRequest>,
) -> ApiResult<Draft> {
    let draft = state.records.save_draft(request).await?;
    Ok(ApiResponse::new(draft).navigate(Navigate::to(View::Dashboard)))
}

/// DELETE /api/draft - Discard the draft.
pub async fn clear_draft(State(state): State<AppState>) -> ApiResult<()> {
    state.records.clear_draft().await?;
    success(())
}
