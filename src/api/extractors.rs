//! # Custom Extractors
//!
//! Extractor‌های سفارشی برای استخراج داده از request
//!
//! ## مفاهیم Rust + Axum:
//! - **FromRequestParts**: extractor که به body دست نمیزنه
//! - **FromRequest**: extractor که body رو مصرف میکنه (باید آخرین پارامتر باشه)
//! - **Rejection**: نوع خطا برای extractors
//!
//! ## چطور کار میکنه؟
//! وقتی یه extractor به عنوان پارامتر handler تعریف میشه،
//! axum قبل از اجرای handler، extractor رو اجرا میکنه.

use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts},
    http::{header, request::Parts, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::{
    error::AppError,
    models::User,
    services::AppState,
    utils,
};

// =====================================
// Bearer Token Extractor
// =====================================
/// استخراج توکن از header Authorization
///
/// # استفاده در handler:
/// ```rust,ignore
/// async fn handler(BearerToken(token): BearerToken) -> ... {
///     // token حالا یه String هست
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(utils::extract_bearer_token)
            .ok_or_else(AppError::token_missing)?;

        Ok(BearerToken(token.to_string()))
    }
}

// =====================================
// Auth User Extractor
// =====================================
/// استخراج کاربر احراز هویت شده
///
/// # مفاهیم:
/// - توکن verify میشه و کاربرش از دیتابیس خونده میشه
/// - اگه توکن نامعتبر باشه، 401 برمیگرده
///
/// # استفاده:
/// ```rust,ignore
/// async fn handler(AuthUser(user): AuthUser) -> ... {
///     // user کاربر صاحب توکنه
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        let user = state.auth_service.authenticate(&token).await?;

        Ok(AuthUser(user))
    }
}

// =====================================
// JSON Body Extractor
// =====================================
/// استخراج JSON که خطای parse رو 400 برمیگردونه
///
/// اعتبارسنجی فیلدها در سرویس انجام میشه، چون PUT و POST
/// هر دو باید همون قوانین رو اجرا کنن.
///
/// # استفاده:
/// ```rust,ignore
/// async fn handler(ValidatedJson(data): ValidatedJson<BlogRequest>) -> ... {
///     // data حتما JSON درست بوده
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data): Json<T> = Json::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::BadRequest(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(ValidatedJson(data))
    }
}
