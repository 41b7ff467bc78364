//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات برنامه هست.
//!
//! ## مفاهیم Rust:
//! - **Structs**: ساختار داده‌ای برای نگهداری تنظیمات
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Serde**: سریالایز/دسریالایز
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use std::env;
use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// کلید پیش‌فرض JWT که در production نباید استفاده بشه
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use bloglist::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.port, 3003);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به دیتابیس
    pub database_url: String,

    /// کلید مخفی JWT
    pub jwt_secret: String,

    /// مدت اعتبار توکن JWT (ساعت)
    pub jwt_expiration_hours: u64,

    /// حداکثر زمان پردازش هر request (ثانیه)
    pub request_timeout_secs: u64,

    /// محیط اجرا (development, test, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه
    #[default]
    Development,

    /// محیط تست - دیتابیس جدا
    Testing,

    /// محیط تولید
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    #[must_use]
    pub fn is_testing(&self) -> bool {
        matches!(self, Environment::Testing)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// مقدار ناشناخته development در نظر گرفته میشه
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3003,
            database_url: "sqlite://data/bloglist.db?mode=rwc".to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiration_hours: 24,
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// # مفاهیم:
    /// - `env::var()`: خوندن متغیر محیطی
    /// - `unwrap_or_else`: مقدار پیش‌فرض با closure
    ///
    /// در محیط test به جای `DATABASE_URL` از `TEST_DATABASE_URL` استفاده میشه.
    /// `JWT_SECRET` اگه نبود، `SECRET` خونده میشه.
    ///
    /// # Errors
    /// خطا برمیگردونه اگه `PORT` عدد معتبر نباشه
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_env = |key: &str, default: u64| -> u64 {
            env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", value)))?,
            Err(_) => defaults.port,
        };

        let environment: Environment = get_env("ENVIRONMENT", "development").into();

        let database_url = if environment.is_testing() {
            get_env("TEST_DATABASE_URL", "sqlite::memory:")
        } else {
            get_env("DATABASE_URL", &defaults.database_url)
        };

        let jwt_secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("SECRET"))
            .unwrap_or(defaults.jwt_secret);

        Ok(Self {
            host: get_env("HOST", &defaults.host),
            port,
            database_url,
            jwt_secret,
            jwt_expiration_hours: parse_env("JWT_EXPIRATION_HOURS", defaults.jwt_expiration_hours),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            environment,
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// - کلید پیش‌فرض JWT در production
    /// - پورت صفر
    pub fn validate(&self) -> Result<()> {
        if self.environment.is_production() && self.jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::Config(
                "JWT_SECRET must be changed in production".to_string()
            ));
        }

        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use bloglist::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("0.0.0.0")
///     .build();
/// assert_eq!(config.server_addr(), "0.0.0.0:8080");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    #[must_use]
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    #[must_use]
    pub fn jwt_expiration_hours(mut self, hours: u64) -> Self {
        self.config.jwt_expiration_hours = hours;
        self
    }

    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3003);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.jwt_expiration_hours, 24);
    }

    #[test]
    fn test_config_builder() {
        let config = ConfigBuilder::new()
            .port(8080)
            .host("0.0.0.0")
            .jwt_secret("sekret")
            .build();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.jwt_secret, "sekret");
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("TEST".to_string()), Environment::Testing);
        assert_eq!(Environment::from("unknown".to_string()), Environment::Development);
    }

    #[test]
    fn test_validation_fails_in_production_with_default_secret() {
        let result = ConfigBuilder::new()
            .environment(Environment::Production)
            .build_validated();

        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_port_zero() {
        assert!(ConfigBuilder::new().port(0).build_validated().is_err());
    }
}
