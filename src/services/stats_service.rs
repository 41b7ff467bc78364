//! # سرویس آمار
//!
//! بلاگ‌ها رو از دیتابیس میخونه و به ماژول `stats` میده.

use tracing::debug;

use crate::{
    database::{BlogRepository, Repository},
    error::Result,
    stats::StatsReport,
};

use super::Service;

/// سرویس گزارش آمار
#[derive(Debug, Clone)]
pub struct StatsService {
    repo: BlogRepository,
}

impl Service for StatsService {}

impl StatsService {
    #[must_use]
    pub fn new(repo: BlogRepository) -> Self {
        Self { repo }
    }

    /// محاسبه آمار روی همه بلاگ‌ها
    pub async fn get_stats(&self) -> Result<StatsReport> {
        let blogs = self.repo.find_all().await?;
        debug!(count = blogs.len(), "Computing blog statistics");

        Ok(StatsReport::from_posts(&blogs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{database::Database, models::{BlogRequest, CreateBlog}};

    #[tokio::test]
    async fn test_stats_over_stored_blogs() {
        let db = Database::in_memory().await.unwrap();
        let repo = BlogRepository::new(db);

        for (author, likes) in [("tommi", 9), ("mongo", 5), ("tommi", 3)] {
            let request = BlogRequest {
                title: format!("{} {}", author, likes),
                author: Some(author.to_string()),
                url: "www.url.fi".to_string(),
                likes: Some(likes),
            };
            repo.create(&CreateBlog::new(request, None)).await.unwrap();
        }

        let report = StatsService::new(repo).get_stats().await.unwrap();

        assert_eq!(report.total_likes, 17);
        assert_eq!(report.favourite_blog.unwrap().likes, 9);
        assert_eq!(report.most_likes.unwrap().likes, 12);
        assert_eq!(report.most_blogs.blogs, 2);
    }

    #[tokio::test]
    async fn test_stats_on_empty_store() {
        let db = Database::in_memory().await.unwrap();
        let report = StatsService::new(BlogRepository::new(db)).get_stats().await.unwrap();

        assert_eq!(report.total_likes, 0);
        assert!(report.favourite_blog.is_none());
        assert!(report.most_likes.is_none());
        assert_eq!(report.most_blogs.author, "");
    }
}
