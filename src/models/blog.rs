//! # مدل بلاگ
//!
//! Entity و DTO‌های مربوط به پست‌های بلاگ

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// =====================================
// BlogPost (محتوای پست)
// =====================================
/// محتوای یک پست؛ ورودی ماژول آمار
///
/// `likes` هیچوقت منفی نیست و اگه نباشه صفر در نظر گرفته میشه.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl BlogPost {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: i64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
        }
    }
}

impl AsRef<BlogPost> for BlogPost {
    fn as_ref(&self) -> &BlogPost {
        self
    }
}

// =====================================
// Blog Entity
// =====================================
/// Entity اصلی بلاگ
///
/// # مفاهیم:
/// - `#[sqlx(flatten)]`: ستون‌های `BlogPost` از همون ردیف خونده میشن
/// - `#[serde(flatten)]`: در JSON هم فیلدها کنار هم میان
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: String,

    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: BlogPost,

    /// شناسه کاربر مالک
    pub user_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// آیا این کاربر مالک پسته؟
    #[must_use]
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
    }
}

impl AsRef<BlogPost> for Blog {
    fn as_ref(&self) -> &BlogPost {
        &self.post
    }
}

/// بلاگ همراه با اطلاعات مالک (نتیجه LEFT JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct BlogWithOwner {
    #[sqlx(flatten)]
    pub blog: Blog,

    pub owner_username: Option<String>,
    pub owner_name: Option<String>,
}

// =====================================
// Create / Update DTOs
// =====================================
/// داده برای ساخت بلاگ (داخلی)
///
/// این DTO برای ارسال به Repository استفاده میشه
#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub id: String,
    pub post: BlogPost,
    pub user_id: Option<String>,
}

impl CreateBlog {
    /// ساخت از درخواست API با شناسه جدید
    #[must_use]
    pub fn new(request: BlogRequest, user_id: Option<String>) -> Self {
        Self {
            id: crate::models::Id::new().into_string(),
            post: request.into_post(),
            user_id,
        }
    }
}

// =====================================
// API Request DTOs
// =====================================
/// درخواست ساخت یا بروزرسانی بلاگ
///
/// # مفاهیم:
/// - `#[serde(default)]`: فیلد نبود، مقدار پیش‌فرض
/// - title و url اجباری هستن؛ رشته خالی هم قبول نیست
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BlogRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "likes cannot be negative"))]
    pub likes: Option<i64>,
}

impl BlogRequest {
    /// تبدیل به BlogPost با مقادیر پیش‌فرض
    #[must_use]
    pub fn into_post(self) -> BlogPost {
        BlogPost {
            title: self.title,
            author: self.author.unwrap_or_default(),
            url: self.url,
            likes: self.likes.unwrap_or(0),
        }
    }
}

// =====================================
// API Response DTOs
// =====================================
/// مالک بلاگ در پاسخ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogOwner {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
}

/// پاسخ بلاگ
///
/// این DTO به کلاینت ارسال میشه
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<BlogOwner>,
    pub created_at: DateTime<Utc>,
}

impl From<BlogWithOwner> for BlogResponse {
    fn from(row: BlogWithOwner) -> Self {
        let BlogWithOwner { blog, owner_username, owner_name } = row;

        let user = match (blog.user_id, owner_username) {
            (Some(id), Some(username)) => Some(BlogOwner {
                id,
                username,
                name: owner_name,
            }),
            _ => None,
        };

        Self {
            id: blog.id,
            title: blog.post.title,
            author: blog.post.author,
            url: blog.post.url,
            likes: blog.post.likes,
            user,
            created_at: blog.created_at,
        }
    }
}

/// خلاصه بلاگ داخل پاسخ کاربر
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
}

impl From<&Blog> for BlogSummary {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.clone(),
            title: blog.post.title.clone(),
            author: blog.post.author.clone(),
            url: blog.post.url.clone(),
        }
    }
}
