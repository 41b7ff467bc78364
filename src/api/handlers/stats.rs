//! # Stats Handler
//!
//! آمار بلاگ‌ها

use axum::{
    extract::State,
    Json,
};

use crate::{
    error::Result,
    services::AppState,
    stats::StatsReport,
};

// =====================================
// Get Stats
// =====================================
/// گرفتن آمار کلی بلاگ‌ها
///
/// # Endpoint
/// `GET /api/stats`
///
/// # Response
/// ```json
/// {
///   "total_likes": 17,
///   "favourite_blog": { "title": "moro", "author": "tommi", "likes": 9 },
///   "most_likes": { "author": "tommi", "likes": 12 },
///   "most_blogs": { "author": "tommi", "blogs": 2 }
/// }
/// ```
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsReport>> {
    let stats = state.stats_service.get_stats().await?;

    Ok(Json(stats))
}
