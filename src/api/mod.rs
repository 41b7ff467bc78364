//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Extractors**: استخراج داده از request
//! - **State**: اشتراک state بین handlers
//! - **Middleware**: پردازش قبل/بعد از handler
//!
//! ## ساختار URL‌ها:
//! - `GET /api/blogs` - لیست بلاگ‌ها
//! - `POST /api/blogs` - ساخت بلاگ (توکن لازمه)
//! - `GET /api/blogs/:id` - یک بلاگ
//! - `PUT /api/blogs/:id` - بروزرسانی بلاگ
//! - `DELETE /api/blogs/:id` - حذف بلاگ (فقط مالک)
//! - `GET /api/users` - لیست کاربران
//! - `POST /api/users` - ساخت کاربر
//! - `POST /api/login` - ورود
//! - `GET /api/stats` - آمار بلاگ‌ها
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod extractors;

pub use handlers::*;
pub use middleware::*;
pub use extractors::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use std::time::Duration;

use crate::{
    config::Config,
    database::Database,
    services::AppState,
};

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # Arguments
/// * `db` - اتصال دیتابیس
/// * `config` - تنظیمات برنامه
pub fn create_router(db: Database, config: Config) -> Router {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let state = AppState::new(db, config);

    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::health::unknown_endpoint)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(request_id))
                .layer(axum_middleware::from_fn(request_logger))
                .layer(axum_middleware::from_fn(security_headers))
                .layer(TimeoutLayer::new(timeout))
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any)
                )
        )
        .with_state(state)
}

/// Route‌های API
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blogs", blog_routes())
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/login", post(handlers::login::login))
        .route("/stats", get(handlers::stats::get_stats))
}

/// Route‌های بلاگ
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::blogs::list_blogs).post(handlers::blogs::create_blog),
        )
        .route(
            "/:id",
            get(handlers::blogs::get_blog)
                .put(handlers::blogs::update_blog)
                .delete(handlers::blogs::delete_blog),
        )
}
