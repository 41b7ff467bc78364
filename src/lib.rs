//! # Bloglist Library
//!
//! این کتابخانه backend یک لیست بلاگ رو ارائه میده: ذخیره بلاگ‌ها،
//! کاربران با JWT، و آمار روی بلاگ‌ها (بیشترین لایک، پرکارترین نویسنده و ...).
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── database/       # لایه دیتابیس
//! ├── models/         # مدل‌های داده
//! ├── stats/          # توابع آمار (aggregator)
//! ├── services/       # منطق کسب‌وکار
//! ├── api/            # لایه API
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use bloglist::{config::Config, database::Database};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().unwrap();
//!     let db = Database::connect(&config.database_url).await.unwrap();
//! }
//! ```
//!
//! آمار بدون دیتابیس هم قابل استفاده‌ست:
//!
//! ```rust
//! use bloglist::{models::BlogPost, stats};
//!
//! let posts = vec![BlogPost::new("moro", "tommi", "www.url.fi", 9)];
//! assert_eq!(stats::total_likes(&posts), 9);
//! ```

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول ارتباط با دیتابیس
pub mod database;

/// ماژول مدل‌های داده (Domain Models)
pub mod models;

/// توابع خالص آمار روی لیست بلاگ‌ها
pub mod stats;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================
// کاربر به جای `bloglist::error::Result` میتونه بنویسه `bloglist::Result`

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// کاربرد:
/// ```rust
/// use bloglist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::database::Database;
    pub use crate::error::{AppError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::stats::StatsReport;
}
