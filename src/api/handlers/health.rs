//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    error::ErrorResponse,
    models::HealthResponse,
    services::AppState,
};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": true
/// }
/// ```
pub async fn health_check(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    let db_ok = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            false
        }
    };

    Json(HealthResponse::from_database(db_ok))
}

// =====================================
// Unknown Endpoint
// =====================================
/// پاسخ برای مسیرهای ناموجود
pub async fn unknown_endpoint() -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::NOT_FOUND;

    (
        status,
        Json(ErrorResponse::new("Not Found", "unknown endpoint").with_status(status)),
    )
}
