//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//! - **Error Propagation**: انتشار خطا با `?`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<User, AppError>` میتونیم بنویسیم `Result<User>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[error("...")]`: پیام خطا برای هر نوع
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("{0}")]
    BadRequest(String),

    /// احراز هویت نشده - 401
    #[error("{0}")]
    Unauthorized(String),

    /// پیدا نشد - 404
    #[error("{0}")]
    NotFound(String),

    /// خطای اعتبارسنجی - 400
    #[error("Validation error: {0}")]
    Validation(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// خطای migration
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// خطای JWT (فقط موقع صدور؛ verify خودش به Unauthorized تبدیل میشه)
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 5xx Server Errors
            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migrate(_)
            | Self::Io(_)
            | Self::Jwt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// بلاگ پیدا نشد
    #[must_use]
    pub fn blog_not_found(id: &str) -> Self {
        Self::NotFound(format!("blog '{}' not found", id))
    }

    /// توکن نیست یا فرمتش اشتباهه
    #[must_use]
    pub fn token_missing() -> Self {
        Self::Unauthorized("token missing or invalid".to_string())
    }

    /// شناسه با فرمت اشتباه
    #[must_use]
    pub fn malformatted_id() -> Self {
        Self::BadRequest("malformatted id".to_string())
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// عنوان خطا (مثلا "Not Found")
    pub error: String,

    /// پیام خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // جزئیات خطاهای داخلی فقط لاگ میشه، به کلاینت نمیره
        let message = if self.is_server_error() {
            error!(error = %self, "Server error occurred");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            message,
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}

// =====================================
// From Implementations
// =====================================
// تبدیل validator error
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

// =====================================
// Result Extensions
// =====================================
/// Extension trait برای Result
///
/// # مفاهیم:
/// - Extension Trait: اضافه کردن متد به نوع‌های موجود
pub trait ResultExt<T> {
    /// تبدیل خطا به AppError::Internal
    fn map_internal(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn map_internal(self) -> Result<T> {
        self.map_err(|e| AppError::Internal(e.to_string()))
    }
}

// =====================================
// Option Extensions
// =====================================
/// Extension trait برای Option
pub trait OptionExt<T> {
    /// تبدیل None به AppError::NotFound
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AppError::NotFound(message.into()))
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );

        assert_eq!(
            AppError::Validation("title is required".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );

        assert_eq!(AppError::token_missing().status_code(), StatusCode::UNAUTHORIZED);

        assert_eq!(
            AppError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_error_message_is_plain() {
        assert_eq!(AppError::malformatted_id().to_string(), "malformatted id");
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::new("Not Found", "unknown endpoint")
            .with_status(StatusCode::NOT_FOUND);

        assert_eq!(response.status_code, Some(404));
    }

    #[test]
    fn test_option_extension() {
        let some_value: Option<i32> = Some(42);
        let none_value: Option<i32> = None;

        assert!(some_value.ok_or_not_found("not found").is_ok());
        assert!(matches!(
            none_value.ok_or_not_found("not found"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_result_extension() {
        let ok: std::result::Result<i32, &str> = Ok(42);
        let err: std::result::Result<i32, &str> = Err("original error");

        assert!(ok.map_internal().is_ok());
        assert!(matches!(err.map_internal(), Err(AppError::Internal(_))));
    }
}
