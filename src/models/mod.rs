//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده
//! - **Derive Macros**: تولید خودکار کد
//! - **FromRow**: تبدیل از ردیف دیتابیس
//! - **Serialize/Deserialize**: تبدیل JSON
//! - **Validation**: اعتبارسنجی داده
//! - **Newtype Pattern**: کپسوله کردن نوع‌ها
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که در دیتابیس ذخیره میشه (`Blog`, `User`)
//! - **DTO (Data Transfer Object)**: برای ارسال/دریافت از API
//! - **Domain Model**: منطق کسب‌وکار (`BlogPost`)

mod blog;
mod user;
mod dto;

// Re-export همه مدل‌ها
pub use blog::*;
pub use user::*;
pub use dto::*;

use serde::{Deserialize, Serialize};

// =====================================
// Common Types (Newtype Pattern)
// =====================================
/// شناسه یکتای entity‌ها
///
/// # Newtype Pattern
/// این الگو یه نوع ساده رو wrap میکنه برای:
/// - Type safety: جلوگیری از اشتباه
/// - اضافه کردن متد
///
/// # مثال
/// ```rust
/// use bloglist::models::Id;
///
/// let id = Id::new();
/// assert!(bloglist::utils::is_valid_id(id.as_str()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]  // در JSON فقط مقدار داخلی نمایش داده میشه
pub struct Id(String);

impl Id {
    /// ساخت ID جدید
    #[must_use]
    pub fn new() -> Self {
        Self(crate::utils::generate_id())
    }

    /// گرفتن به عنوان &str
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// تبدیل به String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
