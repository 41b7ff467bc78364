//! # Middleware
//!
//! Middleware‌های سفارشی برای پردازش request/response
//!
//! ## مفاهیم:
//! - **Middleware**: کد که قبل/بعد از handler اجرا میشه
//! - **Tower**: کتابخانه middleware در اکوسیستم Rust
//! - **Layer**: wrapper برای اضافه کردن middleware
//!
//! ## Middleware‌های این ماژول:
//! - Request ID
//! - Request logging
//! - Security headers

use axum::{
    body::Body,
    http::{header::HeaderValue, HeaderName, Request},
    middleware::Next,
    response::IntoResponse,
};
use std::time::Instant;
use tracing::{info, warn};

/// اسم header شناسه request
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

// =====================================
// Request Logger Middleware
// =====================================
/// لاگ کردن هر request با زمان پردازش
///
/// بدنه request لاگ نمیشه چون ممکنه رمز عبور داشته باشه.
///
/// # استفاده:
/// ```rust,ignore
/// let app = Router::new()
///     .layer(axum::middleware::from_fn(request_logger));
/// ```
pub async fn request_logger(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    let status = response.status();
    if status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}

// =====================================
// Request ID Middleware
// =====================================
/// اضافه کردن Request ID به هر request
///
/// # مفاهیم:
/// - اگه کلاینت ID فرستاده باشه همون استفاده میشه
/// - وگرنه یه ID جدید ساخته میشه
/// - ID توی response header هم برمیگرده
pub async fn request_id(
    mut request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(new_request_id);

    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER.clone(), request_id.clone());

    let mut response = next.run(request).await;

    response
        .headers_mut()
        .insert(REQUEST_ID_HEADER.clone(), request_id);

    response
}

/// ID جدید از الفبای nanoid، که همیشه header معتبره
fn new_request_id() -> HeaderValue {
    HeaderValue::from_str(&nanoid::nanoid!(12))
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}

// =====================================
// Security Headers Middleware
// =====================================
/// اضافه کردن header‌های امنیتی
///
/// # Headers:
/// - X-Content-Type-Options
/// - X-Frame-Options
/// - X-XSS-Protection
/// - Referrer-Policy
pub async fn security_headers(
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    // جلوگیری از MIME sniffing
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    // جلوگیری از clickjacking
    headers.insert(
        "X-Frame-Options",
        HeaderValue::from_static("DENY"),
    );

    headers.insert(
        "X-XSS-Protection",
        HeaderValue::from_static("1; mode=block"),
    );

    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}
