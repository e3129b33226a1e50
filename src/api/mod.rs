//! REST API module.
//!
//! Thin handlers over the records layer, the submit service and the mocked account.

mod account;
mod drafts;
mod employees;
mod records;
mod submissions;

pub use account::*;
pub use drafts::*;
pub use employees::*;
pub use records::*;
pub use submissions::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::i18n::Lang;

/// Screens the portal can be sent to after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Apply,
    Update,
    Preview,
}

/// Navigation hint for the portal's router.
#[derive(Debug, Clone, Serialize)]
pub struct Navigate {
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Navigate {
    pub fn to(view: View) -> Self {
        Self {
            view,
            payload: None,
        }
    }

    pub fn with_payload(view: View, payload: serde_json::Value) -> Self {
        Self {
            view,
            payload: Some(payload),
        }
    }
}

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate: Option<Navigate>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            navigate: None,
        }
    }

    pub fn navigate(mut self, navigate: Navigate) -> Self {
        self.navigate = Some(navigate);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Query parameters shared by the read and submit endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalQuery {
    #[serde(default)]
    pub employee_no: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl PortalQuery {
    pub fn lang(&self) -> Lang {
        Lang::from_code(self.lang.as_deref())
    }
}
