//! # سرویس احراز هویت (Authentication Service)
//!
//! مدیریت کاربران، ورود و JWT
//!
//! ## مفاهیم Rust:
//! - Password Hashing: هش کردن امن رمز عبور
//! - JWT: توکن‌های احراز هویت

use std::{collections::HashMap, sync::Arc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    config::Config,
    database::{BlogRepository, Repository, UserRepository},
    error::{AppError, Result},
    models::{
        BlogSummary, Claims, CreateUser, LoginRequest, LoginResponse,
        RegisterRequest, User, UserResponse,
    },
    utils,
};

use super::Service;

// =====================================
// Auth Service
// =====================================
/// سرویس احراز هویت
///
/// # مسئولیت‌ها:
/// - ساخت کاربر
/// - ورود و صدور توکن
/// - اعتبارسنجی توکن
#[derive(Debug, Clone)]
pub struct AuthService {
    repo: UserRepository,
    blogs: BlogRepository,
    config: Arc<Config>,
}

impl Service for AuthService {}

impl AuthService {
    #[must_use]
    pub fn new(repo: UserRepository, blogs: BlogRepository, config: Arc<Config>) -> Self {
        Self { repo, blogs, config }
    }

    /// ساخت کاربر جدید
    ///
    /// # Errors
    /// - `Validation`: username یا password کوتاه
    /// - `BadRequest`: username تکراری
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse> {
        request.validate()?;

        if self.repo.username_exists(&request.username).await? {
            return Err(AppError::BadRequest("username must be unique".to_string()));
        }

        let create_user = CreateUser::new(&request.username, &request.password, request.name)?;
        let user = self.repo.create(&create_user).await?;

        info!(user_id = %user.id, "New user registered");

        Ok(user.into())
    }

    /// لیست کاربران همراه با بلاگ‌هاشون
    pub async fn list_users(&self) -> Result<Vec<UserResponse>> {
        let users = self.repo.find_all().await?;

        // یک query برای همه بلاگ‌ها، بعد گروه‌بندی بر اساس مالک
        let mut by_owner: HashMap<String, Vec<BlogSummary>> = HashMap::new();
        for blog in self.blogs.find_all().await? {
            if let Some(owner) = &blog.user_id {
                by_owner.entry(owner.clone()).or_default().push(BlogSummary::from(&blog));
            }
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let blogs = by_owner.remove(&user.id).unwrap_or_default();
                UserResponse::with_blogs(user, blogs)
            })
            .collect())
    }

    /// ورود کاربر
    ///
    /// پیام خطا برای username ناموجود و رمز اشتباه یکیه.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        request.validate()?;

        let invalid = || AppError::Unauthorized("invalid username or password".to_string());

        let user = self.repo
            .find_by_username(&request.username)
            .await?
            .ok_or_else(invalid)?;

        if !user.verify_password(&request.password)? {
            warn!(username = %request.username, "Failed login attempt");
            return Err(invalid());
        }

        let claims = Claims::new(&user.id, &user.username, self.config.jwt_expiration_hours);
        let token = self.generate_token(&claims)?;

        info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            token,
            username: user.username,
            name: user.name,
            expires_at: claims.expires_at(),
        })
    }

    /// اعتبارسنجی توکن JWT
    ///
    /// # Errors
    /// `Unauthorized` برای امضای اشتباه یا توکن منقضی
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let decoding_key = DecodingKey::from_secret(self.config.jwt_secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| {
                warn!(error = %e, token = %utils::mask_string(token, 8), "Token verification failed");
                AppError::Unauthorized("invalid token".to_string())
            })?;

        if token_data.claims.is_expired() {
            return Err(AppError::Unauthorized("token expired".to_string()));
        }

        Ok(token_data.claims)
    }

    /// توکن رو verify میکنه و کاربرش رو برمیگردونه
    ///
    /// # Errors
    /// `Unauthorized` اگه توکن نامعتبر باشه یا کاربرش حذف شده باشه
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let claims = self.verify_token(token)?;

        self.repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(AppError::token_missing)
    }

    /// تولید توکن JWT
    fn generate_token(&self, claims: &Claims) -> Result<String> {
        let encoding_key = EncodingKey::from_secret(self.config.jwt_secret.as_bytes());
        Ok(encode(&Header::default(), claims, &encoding_key)?)
    }
}
