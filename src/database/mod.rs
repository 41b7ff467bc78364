//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با دیتابیس رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **Arc<T>**: Reference Counting برای اشتراک داده بین threads
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//! - **Traits**: تعریف interface
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Connection Pool: مدیریت اتصالات دیتابیس

mod repository;

pub use repository::*;

use std::{sync::Arc, time::Duration};
use sqlx::{sqlite::{SqlitePool, SqlitePoolOptions}, migrate::Migrator};
use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// آدرس دیتابیس in-memory
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// # مفاهیم:
/// - `Arc<SqlitePool>`: هر clone فقط counter رو زیاد میکنه، pool کپی نمیشه
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/bloglist.db?mode=rwc`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();

        // دیتابیس in-memory با هر اتصال جدید خالی میشه، پس فقط یک اتصال
        if url == IN_MEMORY_URL {
            return Self::in_memory().await;
        }

        // ساخت پوشه دیتابیس اگه وجود نداره
        if let Some(path) = url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// ساخت دیتابیس in-memory با migration‌ها (برای تست و محیط test)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اتصال یا migration fail بشه
    pub async fn in_memory() -> Result<Self> {
        // اتصال نباید بسته بشه، وگرنه داده‌ها از بین میرن
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(IN_MEMORY_URL)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::in_memory().await.unwrap();
        db.health_check().await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'blogs')"
        )
        .fetch_one(db.pool())
        .await
        .unwrap();

        assert_eq!(tables, 2);
    }
}
