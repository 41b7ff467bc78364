//! # سرویس بلاگ
//!
//! منطق کسب‌وکار مربوط به پست‌ها
//!
//! ## قوانین:
//! - ساخت پست فقط با توکن معتبر؛ مالک همون کاربر توکنه
//! - حذف فقط توسط مالک
//! - بروزرسانی محتوا رو کامل جایگزین میکنه

use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    database::{BlogRepository, Repository, UserRepository},
    error::{AppError, OptionExt, Result},
    models::{BlogRequest, BlogResponse, CreateBlog},
    utils,
};

use super::Service;

// =====================================
// Blog Service
// =====================================
/// سرویس مدیریت بلاگ‌ها
#[derive(Debug, Clone)]
pub struct BlogService {
    repo: BlogRepository,
    users: UserRepository,
}

impl Service for BlogService {}

impl BlogService {
    #[must_use]
    pub fn new(repo: BlogRepository, users: UserRepository) -> Self {
        Self { repo, users }
    }

    /// لیست همه بلاگ‌ها با مالکشون
    pub async fn list_blogs(&self) -> Result<Vec<BlogResponse>> {
        let rows = self.repo.find_all_with_owner().await?;
        Ok(rows.into_iter().map(BlogResponse::from).collect())
    }

    /// گرفتن یک بلاگ
    ///
    /// # Errors
    /// - `BadRequest`: شناسه با فرمت اشتباه
    /// - `NotFound`: بلاگ وجود نداره
    #[instrument(skip(self))]
    pub async fn get_blog(&self, id: &str) -> Result<BlogResponse> {
        ensure_valid_id(id)?;

        let row = self.repo
            .find_with_owner(id)
            .await?
            .ok_or_else(|| AppError::blog_not_found(id))?;

        Ok(row.into())
    }

    /// ساخت بلاگ جدید برای کاربر احراز هویت شده
    ///
    /// # Errors
    /// - `Validation`: title یا url خالی
    /// - `Unauthorized`: کاربر توکن دیگه وجود نداره
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_blog(&self, request: BlogRequest, user_id: &str) -> Result<BlogResponse> {
        request.validate()?;

        let owner = self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(AppError::token_missing)?;

        let blog = self.repo
            .create(&CreateBlog::new(request, Some(owner.id.clone())))
            .await?;

        info!(blog_id = %blog.id, user = %owner.username, "Blog added to user");

        self.fetch_response(&blog.id).await
    }

    /// جایگزینی محتوای بلاگ
    ///
    /// `likes` اگه نباشه صفر میشه.
    #[instrument(skip(self, request))]
    pub async fn update_blog(&self, id: &str, request: BlogRequest) -> Result<BlogResponse> {
        ensure_valid_id(id)?;
        request.validate()?;

        let post = request.into_post();

        self.repo
            .update(id, &post)
            .await?
            .ok_or_else(|| AppError::blog_not_found(id))?;

        info!(blog_id = %id, likes = post.likes, "Blog updated");

        self.fetch_response(id).await
    }

    /// حذف بلاگ توسط مالک
    ///
    /// # Errors
    /// - `NotFound`: بلاگ وجود نداره
    /// - `Unauthorized`: کاربر مالک نیست
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: &str, user_id: &str) -> Result<()> {
        ensure_valid_id(id)?;

        let blog = self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::blog_not_found(id))?;

        if !blog.is_owned_by(user_id) {
            warn!(blog_id = %id, user_id = %user_id, "Delete attempted by non-owner");
            return Err(AppError::Unauthorized(
                "only the creator can delete a blog".to_string()
            ));
        }

        self.repo.delete(id).await?;

        info!(blog_id = %id, "Deleted blog");
        Ok(())
    }

    async fn fetch_response(&self, id: &str) -> Result<BlogResponse> {
        let row = self.repo
            .find_with_owner(id)
            .await?
            .ok_or_not_found(format!("blog '{}' not found", id))?;

        Ok(row.into())
    }
}

/// شناسه با فرمت اشتباه 400 میده، نه 404
fn ensure_valid_id(id: &str) -> Result<()> {
    if utils::is_valid_id(id) {
        Ok(())
    } else {
        Err(AppError::malformatted_id())
    }
}
