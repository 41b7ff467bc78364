//! # User Handlers
//!
//! Handler‌های مربوط به کاربران

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::extractors::ValidatedJson,
    error::Result,
    models::{RegisterRequest, UserResponse},
    services::AppState,
};

// =====================================
// List Users
// =====================================
/// لیست کاربران با بلاگ‌هاشون
///
/// # Endpoint
/// `GET /api/users`
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state.auth_service.list_users().await?;

    Ok(Json(users))
}

// =====================================
// Create User
// =====================================
/// ساخت کاربر جدید
///
/// # Endpoint
/// `POST /api/users`
///
/// # Request Body
/// ```json
/// {
///   "username": "mluukkai",
///   "name": "Matti Luukkainen",   // optional
///   "password": "salainen"
/// }
/// ```
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}
