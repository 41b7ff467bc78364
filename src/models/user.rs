//! # مدل کاربر (User Model)
//!
//! Entity و DTO‌های مربوط به کاربر

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::{Result, ResultExt};
use super::BlogSummary;

// =====================================
// User Entity
// =====================================
/// Entity کاربر
///
/// # مفاهیم:
/// - `FromRow`: تبدیل از ردیف دیتابیس
/// - Serialize نداره: password_hash هرگز به کلاینت ارسال نمیشه
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: Option<String>,

    /// هش رمز عبور (Argon2)
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// بررسی رمز عبور
    ///
    /// # مفاهیم:
    /// - Argon2 مقایسه رو constant-time انجام میده
    ///
    /// # Errors
    /// خطا برمیگردونه اگه هش ذخیره شده قابل parse نباشه
    pub fn verify_password(&self, password: &str) -> Result<bool> {
        use argon2::{Argon2, PasswordHash, PasswordVerifier};

        let parsed_hash = PasswordHash::new(&self.password_hash).map_internal()?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

// =====================================
// Create User DTO
// =====================================
/// داده برای ساخت کاربر (داخلی)
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub password_hash: String,
}

impl CreateUser {
    /// ساخت کاربر جدید با هش کردن رمز عبور
    ///
    /// # مفاهیم:
    /// - Salt خودکار با OsRng تولید میشه
    ///
    /// # Errors
    /// خطا برمیگردونه اگه hashing fail بشه
    pub fn new(
        username: impl Into<String>,
        password: &str,
        name: Option<String>,
    ) -> Result<Self> {
        use argon2::{
            password_hash::{rand_core::OsRng, SaltString},
            Argon2, PasswordHasher,
        };

        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_internal()?
            .to_string();

        Ok(Self {
            id: super::Id::new().into_string(),
            username: username.into(),
            name,
            password_hash,
        })
    }
}

// =====================================
// API Request DTOs
// =====================================
/// درخواست ساخت کاربر
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 3, message = "password must be at least 3 characters"))]
    pub password: String,
}

/// درخواست ورود
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// =====================================
// API Response DTOs
// =====================================
/// پاسخ اطلاعات کاربر
///
/// توجه: password_hash اینجا نیست!
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub blogs: Vec<BlogSummary>,
}

impl UserResponse {
    /// ساخت پاسخ با لیست بلاگ‌های کاربر
    #[must_use]
    pub fn with_blogs(user: User, blogs: Vec<BlogSummary>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs,
        }
    }
}

/// تبدیل User به UserResponse (بدون بلاگ)
///
/// این تضمین میکنه password_hash هیچوقت leak نشه
impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::with_blogs(user, Vec::new())
    }
}

/// پاسخ ورود موفق
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: Option<String>,
    pub expires_at: DateTime<Utc>,
}

// =====================================
// JWT Claims
// =====================================
/// محتویات توکن JWT
///
/// # مفاهیم:
/// - `sub`: Subject (شناسه کاربر)
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (زمان صدور)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// ساخت claims جدید
    #[must_use]
    pub fn new(user_id: &str, username: &str, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        }
    }

    /// آیا توکن منقضی شده؟
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// زمان انقضا به صورت DateTime
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() {
        let create = CreateUser::new("root", "salainen", Some("Superuser".to_string())).unwrap();
        let user = User {
            id: create.id,
            username: create.username,
            name: create.name,
            password_hash: create.password_hash,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(user.verify_password("salainen").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_register_validation() {
        let short = RegisterRequest {
            username: "ab".to_string(),
            name: None,
            password: "secret".to_string(),
        };
        assert!(short.validate().is_err());

        let ok = RegisterRequest {
            username: "mluukkai".to_string(),
            name: Some("Matti Luukkainen".to_string()),
            password: "salainen".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
