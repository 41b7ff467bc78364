//! # آمار بلاگ‌ها (Aggregator)
//!
//! توابع pure برای محاسبه آمار روی لیستی از پست‌ها.
//! هیچ I/O یا state مشترکی نداره و ورودی رو تغییر نمیده.
//!
//! ## قوانین tie-break
//! - بیشترین مقدار همیشه با مقایسه `>` (نه `>=`) در یک fold چپ به راست پیدا میشه،
//!   پس اولین عنصر بیشینه برنده‌ست.
//! - گروه‌بندی بر اساس نویسنده ترتیب اولین ظهور رو نگه میداره.
//!
//! ## مثال
//! ```rust
//! use bloglist::models::BlogPost;
//! use bloglist::stats;
//!
//! let posts = vec![
//!     BlogPost::new("moro", "tommi", "www.url.fi", 9),
//!     BlogPost::new("moikkumies kaiken ties", "mongo", "www.mango.fi", 5),
//!     BlogPost::new("toinen", "tommi", "www.url.fi/2", 3),
//! ];
//!
//! assert_eq!(stats::total_likes(&posts), 17);
//! assert_eq!(stats::most_blogs(&posts).blogs, 2);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::BlogPost;

// =====================================
// Result Shapes
// =====================================
/// محبوب‌ترین پست (بدون url و شناسه)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavouriteBlog {
    pub title: String,
    pub author: String,
    pub likes: i64,
}

/// مجموع لایک‌های یک نویسنده
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i64,
}

/// تعداد پست‌های یک نویسنده
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: usize,
}

/// همه آمارها با هم، برای endpoint `/api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_likes: i64,
    pub favourite_blog: Option<FavouriteBlog>,
    pub most_likes: Option<AuthorLikes>,
    pub most_blogs: AuthorBlogs,
}

impl StatsReport {
    /// محاسبه همه آمارها روی یک لیست
    #[must_use]
    pub fn from_posts<P: AsRef<BlogPost>>(posts: &[P]) -> Self {
        Self {
            total_likes: total_likes(posts),
            favourite_blog: favourite_blog(posts),
            most_likes: most_likes(posts),
            most_blogs: most_blogs(posts),
        }
    }
}

// =====================================
// Operations
// =====================================
/// همیشه 1 برمیگردونه؛ فقط برای smoke test
#[must_use]
pub fn dummy<P: AsRef<BlogPost>>(_posts: &[P]) -> u32 {
    1
}

/// مجموع لایک‌ها؛ برای لیست خالی صفر
///
/// جمع saturating هست: نتیجه از `i64::MAX` بالاتر نمیره.
#[must_use]
pub fn total_likes<P: AsRef<BlogPost>>(posts: &[P]) -> i64 {
    posts
        .iter()
        .map(|p| AsRef::<BlogPost>::as_ref(p).likes)
        .fold(0, i64::saturating_add)
}

/// پستی که بیشترین لایک رو داره
///
/// با تساوی، اولین پست در ترتیب ورودی برمیگرده.
/// برای لیست خالی `None`.
#[must_use]
pub fn favourite_blog<P: AsRef<BlogPost>>(posts: &[P]) -> Option<FavouriteBlog> {
    let mut iter = posts.iter().map(AsRef::<BlogPost>::as_ref);
    let first = iter.next()?;

    let best = iter.fold(first, |best, post| {
        if post.likes > best.likes {
            post
        } else {
            best
        }
    });

    Some(FavouriteBlog {
        title: best.title.clone(),
        author: best.author.clone(),
        likes: best.likes,
    })
}

/// نویسنده‌ای که مجموع لایک‌هاش بیشترینه
///
/// برای لیست خالی `None`.
#[must_use]
pub fn most_likes<P: AsRef<BlogPost>>(posts: &[P]) -> Option<AuthorLikes> {
    let groups = group_by_author(posts);

    let mut best: Option<&AuthorGroup<'_>> = None;
    for group in &groups {
        match best {
            Some(current) if group.likes <= current.likes => {}
            _ => best = Some(group),
        }
    }

    best.map(|g| AuthorLikes {
        author: g.author.to_string(),
        likes: g.likes,
    })
}

/// نویسنده‌ای که بیشترین تعداد پست رو داره
///
/// با تساوی، نویسنده‌ای که زودتر در ورودی دیده شده برنده‌ست.
/// برای لیست خالی `{author: "", blogs: 0}`.
#[must_use]
pub fn most_blogs<P: AsRef<BlogPost>>(posts: &[P]) -> AuthorBlogs {
    let mut author = "";
    let mut blogs = 0;

    for group in group_by_author(posts) {
        if group.blogs > blogs {
            author = group.author;
            blogs = group.blogs;
        }
    }

    AuthorBlogs {
        author: author.to_string(),
        blogs,
    }
}

// =====================================
// Grouping
// =====================================
/// accumulator برای یک نویسنده
#[derive(Debug)]
struct AuthorGroup<'a> {
    author: &'a str,
    likes: i64,
    blogs: usize,
}

/// گروه‌بندی بر اساس نویسنده به ترتیب اولین ظهور
///
/// index نگه میداره که هر نویسنده کجای Vec هست؛ خود Vec ترتیب رو حفظ میکنه.
fn group_by_author<P: AsRef<BlogPost>>(posts: &[P]) -> Vec<AuthorGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AuthorGroup<'_>> = Vec::new();

    for post in posts.iter().map(AsRef::<BlogPost>::as_ref) {
        let slot = *index.entry(post.author.as_str()).or_insert_with(|| {
            groups.push(AuthorGroup {
                author: post.author.as_str(),
                likes: 0,
                blogs: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.likes = group.likes.saturating_add(post.likes);
        group.blogs += 1;
    }

    groups
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(title: &str, author: &str, likes: i64) -> BlogPost {
        BlogPost::new(title, author, format!("www.{}.fi", title), likes)
    }

    fn sample() -> Vec<BlogPost> {
        vec![
            post("moro", "tommi", 9),
            post("moikkumies kaiken ties", "mongo", 5),
            post("toinen", "tommi", 3),
        ]
    }

    #[test]
    fn test_dummy_returns_one() {
        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(dummy(&empty), 1);
        assert_eq!(dummy(&sample()), 1);
    }

    #[test]
    fn test_total_likes() {
        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(total_likes(&empty), 0);
        assert_eq!(total_likes(&[post("a", "x", 7)]), 7);
        assert_eq!(total_likes(&sample()), 17);
    }

    #[test]
    fn test_likes_sum_saturates_at_max() {
        let posts = vec![
            post("huge", "tommi", i64::MAX),
            post("one", "tommi", 1),
            post("other", "mongo", i64::MAX),
        ];

        assert_eq!(total_likes(&posts), i64::MAX);
        assert_eq!(
            most_likes(&posts),
            Some(AuthorLikes {
                author: "tommi".to_string(),
                likes: i64::MAX,
            })
        );
    }

    #[test]
    fn test_favourite_blog() {
        let favourite = favourite_blog(&sample()).unwrap();
        assert_eq!(
            favourite,
            FavouriteBlog {
                title: "moro".to_string(),
                author: "tommi".to_string(),
                likes: 9,
            }
        );
    }

    #[test]
    fn test_favourite_blog_empty() {
        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(favourite_blog(&empty), None);
    }

    #[test]
    fn test_favourite_blog_tie_keeps_first() {
        let posts = vec![post("eka", "a", 4), post("toka", "b", 4), post("kolmas", "c", 1)];
        assert_eq!(favourite_blog(&posts).unwrap().title, "eka");
    }

    #[test]
    fn test_most_likes() {
        assert_eq!(
            most_likes(&sample()),
            Some(AuthorLikes {
                author: "tommi".to_string(),
                likes: 12,
            })
        );
    }

    #[test]
    fn test_most_likes_tie_keeps_first_seen_author() {
        let posts = vec![post("a", "mongo", 2), post("b", "tommi", 5), post("c", "mongo", 3)];
        assert_eq!(most_likes(&posts).unwrap().author, "mongo");
    }

    #[test]
    fn test_most_likes_empty() {
        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(most_likes(&empty), None);
    }

    #[test]
    fn test_most_blogs() {
        assert_eq!(
            most_blogs(&sample()),
            AuthorBlogs {
                author: "tommi".to_string(),
                blogs: 2,
            }
        );
    }

    #[test]
    fn test_most_blogs_empty() {
        let empty: Vec<BlogPost> = Vec::new();
        assert_eq!(
            most_blogs(&empty),
            AuthorBlogs {
                author: String::new(),
                blogs: 0,
            }
        );
    }

    #[test]
    fn test_most_blogs_tie_keeps_first_seen_author() {
        let posts = vec![post("a", "b", 0), post("b", "a", 0), post("c", "a", 0), post("d", "b", 0)];
        assert_eq!(most_blogs(&posts).author, "b");
    }

    #[test]
    fn test_operations_do_not_mutate_input() {
        let posts = sample();
        let before = posts.clone();

        let first = StatsReport::from_posts(&posts);
        let second = StatsReport::from_posts(&posts);

        assert_eq!(first, second);
        assert_eq!(posts, before);
    }
}
