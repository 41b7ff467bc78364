//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! این ماژول منطق کسب‌وکار برنامه رو پیاده‌سازی میکنه.
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- Business logic (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- Data access
//! ├─────────────────┤
//! │    Database     │  <-- SQLite
//! └─────────────────┘
//! ```

mod auth_service;
mod blog_service;
mod stats_service;

pub use auth_service::*;
pub use blog_service::*;
pub use stats_service::*;

use std::sync::Arc;
use crate::{
    config::Config,
    database::{BlogRepository, Database, UserRepository},
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: فقط Arc clone میشه، نه داده
#[derive(Clone)]
pub struct AppState {
    /// دیتابیس (برای health check)
    pub database: Database,

    /// سرویس بلاگ‌ها
    pub blog_service: Arc<BlogService>,

    /// سرویس کاربران و احراز هویت
    pub auth_service: Arc<AuthService>,

    /// سرویس آمار
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// ساخت AppState جدید
    ///
    /// # مفاهیم:
    /// - Dependency Injection: همه وابستگی‌ها تزریق میشن
    #[must_use]
    pub fn new(db: Database, config: Config) -> Self {
        let blog_repo = BlogRepository::new(db.clone());
        let user_repo = UserRepository::new(db.clone());

        let config = Arc::new(config);

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            blog_repo.clone(),
            config,
        ));

        let blog_service = Arc::new(BlogService::new(blog_repo.clone(), user_repo));

        let stats_service = Arc::new(StatsService::new(blog_repo));

        Self {
            database: db,
            blog_service,
            auth_service,
            stats_service,
        }
    }
}

// =====================================
// Service Trait
// =====================================
/// Marker trait برای services
///
/// همه services باید Send + Sync باشن
pub trait Service: Send + Sync {}
