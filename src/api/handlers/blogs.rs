//! # Blog Handlers
//!
//! Handler‌های مربوط به پست‌های بلاگ

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    api::extractors::{AuthUser, ValidatedJson},
    error::Result,
    models::{BlogRequest, BlogResponse},
    services::AppState,
};

// =====================================
// List Blogs
// =====================================
/// لیست همه بلاگ‌ها
///
/// # Endpoint
/// `GET /api/blogs`
///
/// # Response
/// ```json
/// [
///   {
///     "id": "V1StGXR8_Z5jdHi6B-myT",
///     "title": "moro",
///     "author": "tommi",
///     "url": "www.url.fi",
///     "likes": 9,
///     "user": { "id": "...", "username": "root", "name": "Superuser" }
///   }
/// ]
/// ```
pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs))
}

// =====================================
// Create Blog
// =====================================
/// ساخت بلاگ جدید
///
/// # مفاهیم:
/// - `AuthUser`: بدون توکن معتبر 401 برمیگرده
/// - `ValidatedJson`: JSON خراب 400 میده
///
/// # Endpoint
/// `POST /api/blogs`
///
/// # Headers
/// `Authorization: Bearer <token>`
///
/// # Request Body
/// ```json
/// {
///   "title": "newBlog",
///   "author": "Newman",   // optional
///   "url": "www.newblog.fi",
///   "likes": 42           // optional, default 0
/// }
/// ```
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> Result<impl IntoResponse> {
    let blog = state.blog_service.create_blog(request, &user.id).await?;

    Ok((StatusCode::CREATED, Json(blog)))
}

// =====================================
// Get Blog
// =====================================
/// گرفتن یک بلاگ
///
/// # Endpoint
/// `GET /api/blogs/:id`
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>> {
    let blog = state.blog_service.get_blog(&id).await?;

    Ok(Json(blog))
}

// =====================================
// Update Blog
// =====================================
/// بروزرسانی بلاگ
///
/// محتوا کامل جایگزین میشه؛ `likes` اگه نباشه صفر میشه.
///
/// # Endpoint
/// `PUT /api/blogs/:id`
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<BlogRequest>,
) -> Result<Json<BlogResponse>> {
    let blog = state.blog_service.update_blog(&id, request).await?;

    Ok(Json(blog))
}

// =====================================
// Delete Blog
// =====================================
/// حذف بلاگ
///
/// # مفاهیم:
/// - Authorization: فقط مالک میتونه حذف کنه
/// - 204 No Content: پاسخ بدون بدنه
///
/// # Endpoint
/// `DELETE /api/blogs/:id`
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.blog_service.delete_blog(&id, &user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
