//! # Login Handler

use axum::{extract::State, Json};

use crate::{
    api::extractors::ValidatedJson,
    error::Result,
    models::{LoginRequest, LoginResponse},
    services::AppState,
};

/// ورود کاربر
///
/// # Endpoint
/// `POST /api/login`
///
/// # Request Body
/// ```json
/// { "username": "mluukkai", "password": "salainen" }
/// ```
///
/// # Response
/// ```json
/// {
///   "token": "eyJ...",
///   "username": "mluukkai",
///   "name": "Matti Luukkainen",
///   "expires_at": "2024-..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let response = state.auth_service.login(request).await?;

    Ok(Json(response))
}
