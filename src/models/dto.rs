//! # Data Transfer Objects (DTOs)
//!
//! DTO‌های عمومی که به یک entity خاص تعلق ندارن

use serde::{Deserialize, Serialize};

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
}

impl HealthResponse {
    /// ساخت پاسخ بر اساس وضعیت دیتابیس
    #[must_use]
    pub fn from_database(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
        }
    }
}
