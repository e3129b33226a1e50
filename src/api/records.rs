//! Resolution and preview endpoints.

use axum::extract::{Query, State};

use super::{success, ApiResult, PortalQuery};
use crate::models::ResolvedRecord;
use crate::preview::{render_preview, Preview};
use crate::AppState;

/// GET /api/records/resolve - Record a form should start from.
pub async fn resolve_record(
    State(state): State<AppState>,
    Query(query): Query<PortalQuery>,
) -> ApiResult<ResolvedRecord> {
    let resolved = state.records.resolve(query.employee_no.as_deref()).await;
    success(resolved)
}

/// GET /api/preview - Resolved record laid out for display.
pub async fn get_preview(
    State(state): State<AppState>,
    Query(query): Query<PortalQuery>,
) -> ApiResult<Preview> {
    let resolved = state.records.resolve(query.employee_no.as_deref()).await;
    success(render_preview(&resolved, query.lang()))
}
