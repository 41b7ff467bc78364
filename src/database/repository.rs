//! # Repository Pattern
//!
//! یه لایه انتزاعی بین منطق برنامه و دیتابیس.
//! - منطق برنامه نمیدونه داده کجا ذخیره میشه
//! - تست کردن راحت‌تر میشه
//!
//! ## مفاهیم Rust:
//! - **async_trait**: امکان async در traits
//! - **Associated Types**: نوع‌های مرتبط با trait

use async_trait::async_trait;
use chrono::Utc;

use super::Database;
use crate::{
    error::{AppError, Result},
    models::{Blog, BlogPost, BlogWithOwner, CreateBlog, CreateUser, User},
};

// =====================================
// Base Repository Trait
// =====================================
/// Trait پایه برای همه Repository‌ها
///
/// # مفاهیم:
/// - `Send + Sync`: امکان ارسال بین threads
/// - Associated Types: `type Entity` و `type Id`
#[async_trait]
pub trait Repository: Send + Sync {
    /// نوع Entity که این repository باهاش کار میکنه
    type Entity: Send + Sync;

    /// نوع شناسه (ID)
    type Id: Send + Sync + ?Sized;

    /// پیدا کردن با ID
    async fn find_by_id(&self, id: &Self::Id) -> Result<Option<Self::Entity>>;

    /// پیدا کردن همه، به ترتیب درج
    async fn find_all(&self) -> Result<Vec<Self::Entity>>;

    /// حذف با ID
    async fn delete(&self, id: &Self::Id) -> Result<bool>;

    /// شمارش کل
    async fn count(&self) -> Result<i64>;
}

// =====================================
// Blog Repository
// =====================================
// alias صریح، تا اسم ستون‌ها در JOIN همون اسم فیلدهای FromRow باشه
const BLOG_COLUMNS: &str = "b.id AS id, b.title AS title, b.author AS author, b.url AS url, \
    b.likes AS likes, b.user_id AS user_id, b.created_at AS created_at, b.updated_at AS updated_at";

/// Repository برای مدیریت بلاگ‌ها
#[derive(Debug, Clone)]
pub struct BlogRepository {
    db: Database,
}

impl BlogRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// همه بلاگ‌ها همراه با مالک (LEFT JOIN روی users)
    pub async fn find_all_with_owner(&self) -> Result<Vec<BlogWithOwner>> {
        let query = format!(
            "SELECT {BLOG_COLUMNS}, u.username AS owner_username, u.name AS owner_name \
             FROM blogs b LEFT JOIN users u ON u.id = b.user_id \
             ORDER BY b.rowid"
        );

        let rows = sqlx::query_as::<_, BlogWithOwner>(&query)
            .fetch_all(self.db.pool())
            .await?;

        Ok(rows)
    }

    /// یک بلاگ همراه با مالک
    pub async fn find_with_owner(&self, id: &str) -> Result<Option<BlogWithOwner>> {
        let query = format!(
            "SELECT {BLOG_COLUMNS}, u.username AS owner_username, u.name AS owner_name \
             FROM blogs b LEFT JOIN users u ON u.id = b.user_id \
             WHERE b.id = ?"
        );

        let row = sqlx::query_as::<_, BlogWithOwner>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row)
    }

    /// ایجاد بلاگ جدید
    pub async fn create(&self, create_blog: &CreateBlog) -> Result<Blog> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, author, url, likes, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&create_blog.id)
        .bind(&create_blog.post.title)
        .bind(&create_blog.post.author)
        .bind(&create_blog.post.url)
        .bind(create_blog.post.likes)
        .bind(&create_blog.user_id)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        self.find_by_id(&create_blog.id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create blog".to_string()))
    }

    /// جایگزینی محتوای بلاگ
    ///
    /// # Returns
    /// `None` اگه بلاگ وجود نداشته باشه
    pub async fn update(&self, id: &str, post: &BlogPost) -> Result<Option<Blog>> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = ?, author = ?, url = ?, likes = ?, updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(&post.title)
        .bind(&post.author)
        .bind(&post.url)
        .bind(post.likes)
        .bind(Utc::now())
        .bind(id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}

#[async_trait]
impl Repository for BlogRepository {
    type Entity = Blog;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>> {
        let query = format!("SELECT {BLOG_COLUMNS} FROM blogs b WHERE b.id = ?");

        let blog = sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(blog)
    }

    async fn find_all(&self) -> Result<Vec<Blog>> {
        let query = format!("SELECT {BLOG_COLUMNS} FROM blogs b ORDER BY b.rowid");

        let blogs = sqlx::query_as::<_, Blog>(&query)
            .fetch_all(self.db.pool())
            .await?;

        Ok(blogs)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

// =====================================
// User Repository
// =====================================
/// Repository برای مدیریت کاربران
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// پیدا کردن با username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            WHERE username = ?
            "#
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }

    /// ایجاد کاربر جدید
    pub async fn create(&self, create_user: &CreateUser) -> Result<User> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(&create_user.id)
        .bind(&create_user.username)
        .bind(&create_user.name)
        .bind(&create_user.password_hash)
        .bind(now)
        .bind(now)
        .execute(self.db.pool())
        .await
        .map_err(|e| match e {
            // دو ثبت‌نام همزمان با یک username از چک قبلی رد میشن
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("username must be unique".to_string())
            }
            other => AppError::Database(other),
        })?;

        self.find_by_id(&create_user.id)
            .await?
            .ok_or_else(|| AppError::Internal("Failed to create user".to_string()))
    }

    /// بررسی وجود username
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = ?"
        )
        .bind(username)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }
}

#[async_trait]
impl Repository for UserRepository {
    type Entity = User;
    type Id = str;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            "#
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, name, password_hash, created_at, updated_at
            FROM users
            ORDER BY rowid
            "#
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(users)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlogRequest;

    async fn setup() -> (BlogRepository, UserRepository) {
        let db = Database::in_memory().await.unwrap();
        (BlogRepository::new(db.clone()), UserRepository::new(db))
    }

    fn request(title: &str, likes: i64) -> BlogRequest {
        BlogRequest {
            title: title.to_string(),
            author: Some("tommi".to_string()),
            url: "www.url.fi".to_string(),
            likes: Some(likes),
        }
    }

    #[tokio::test]
    async fn test_blog_crud() {
        let (blogs, _) = setup().await;

        let created = blogs.create(&CreateBlog::new(request("moro", 9), None)).await.unwrap();
        assert_eq!(created.post.title, "moro");
        assert_eq!(blogs.count().await.unwrap(), 1);

        let mut post = created.post.clone();
        post.likes = 10;
        let updated = blogs.update(&created.id, &post).await.unwrap().unwrap();
        assert_eq!(updated.post.likes, 10);

        assert!(blogs.delete(&created.id).await.unwrap());
        assert!(blogs.find_by_id(&created.id).await.unwrap().is_none());
        assert!(blogs.update(&created.id, &post).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let (blogs, _) = setup().await;

        for (title, likes) in [("moro", 9), ("moikkumies kaiken ties", 5), ("kolmas", 1)] {
            blogs.create(&CreateBlog::new(request(title, likes), None)).await.unwrap();
        }

        let titles: Vec<String> = blogs
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.post.title)
            .collect();

        assert_eq!(titles, vec!["moro", "moikkumies kaiken ties", "kolmas"]);
    }

    #[tokio::test]
    async fn test_owner_is_joined() {
        let (blogs, users) = setup().await;

        let user = users
            .create(&CreateUser::new("root", "salainen", Some("Superuser".to_string())).unwrap())
            .await
            .unwrap();

        let blog = blogs
            .create(&CreateBlog::new(request("moro", 9), Some(user.id.clone())))
            .await
            .unwrap();

        let row = blogs.find_with_owner(&blog.id).await.unwrap().unwrap();
        assert_eq!(row.owner_username.as_deref(), Some("root"));
        assert!(users.username_exists("root").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_username_insert_is_bad_request() {
        let (_, users) = setup().await;

        users.create(&CreateUser::new("root", "salainen", None).unwrap()).await.unwrap();

        // insert مستقیم، بدون چک username_exists
        let result = users.create(&CreateUser::new("root", "other", None).unwrap()).await;

        match result {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "username must be unique"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert_eq!(users.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_user_delete_and_count() {
        let (_, users) = setup().await;

        let user = users.create(&CreateUser::new("root", "salainen", None).unwrap()).await.unwrap();
        users.create(&CreateUser::new("mluukkai", "salainen", None).unwrap()).await.unwrap();
        assert_eq!(users.count().await.unwrap(), 2);

        assert!(users.delete(&user.id).await.unwrap());
        assert!(!users.delete(&user.id).await.unwrap());
        assert_eq!(users.count().await.unwrap(), 1);
        assert!(users.find_by_id(&user.id).await.unwrap().is_none());
    }
}
