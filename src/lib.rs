//! Railway ID-card portal backend.
//!
//! Keeps the portal's draft and submission records in a local record store
//! and serves them over a small JSON API.

pub mod account;
pub mod api;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod preview;
pub mod records;
pub mod resolve;
pub mod session;
pub mod store;
pub mod submit;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use account::AccountService;
use config::{Config, StoreBackend};
use records::Records;
use store::{MemoryStore, SqliteStore, Store};
use submit::SubmitService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub records: Records,
    pub submit: Arc<SubmitService>,
    pub account: Arc<AccountService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the services over an already opened store.
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        let records = Records::new(store);
        let submit = SubmitService::new(
            records.clone(),
            config.submit_delay,
            config.submit_failure,
        );
        let account = AccountService::new(config.mock_password.clone(), config.submit_delay);

        Self {
            records,
            submit: Arc::new(submit),
            account: Arc::new(account),
            config: Arc::new(config),
        }
    }
}

/// Open the store selected by the configuration.
pub async fn open_store(config: &Config) -> Result<Arc<dyn Store>, errors::AppError> {
    match config.store_backend {
        StoreBackend::Sqlite => Ok(Arc::new(SqliteStore::open(&config.db_path).await?)),
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Resolution and preview
        .route("/records/resolve", get(api::resolve_record))
        .route("/preview", get(api::get_preview))
        // Draft slot
        .route(
            "/draft",
            get(api::get_draft)
                .put(api::save_draft)
                .delete(api::clear_draft),
        )
        // Submission
        .route("/submit", post(api::submit_application))
        .route("/submissions/last", get(api::get_last_submission))
        // Update flow
        .route(
            "/employees/{employee_no}",
            get(api::get_employee_record).put(api::save_employee_record),
        )
        // Account
        .route("/account/password", post(api::change_password));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
