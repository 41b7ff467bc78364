//! # ماژول توابع کمکی (Utilities)
//!
//! این ماژول توابع و ثابت‌های کمکی رو ارائه میده.
//!
//! ## مفاهیم Rust:
//! - **static**: متغیرهای با عمر 'static
//! - **once_cell**: مقداردهی اولیه تنبل
//! - **Regex**: عبارات منظم

use once_cell::sync::Lazy;
use regex::Regex;

// =====================================
// Constants
// =====================================
/// طول شناسه‌ها (nanoid)
pub const ID_LENGTH: usize = 21;

/// پیشوند header احراز هویت
pub const BEARER_PREFIX: &str = "bearer ";

// =====================================
// Lazy Statics (Regex patterns)
// =====================================
/// الگوی شناسه معتبر: الفبای پیش‌فرض nanoid
pub static VALID_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{21}$").expect("Invalid regex pattern")
});

// =====================================
// Id Generation
// =====================================
/// تولید شناسه جدید
///
/// ```rust
/// use bloglist::utils::{generate_id, ID_LENGTH};
///
/// assert_eq!(generate_id().len(), ID_LENGTH);
/// ```
#[must_use]
pub fn generate_id() -> String {
    nanoid::nanoid!(ID_LENGTH)
}

/// اعتبارسنجی فرمت شناسه
///
/// شناسه با فرمت اشتباه به جای 404 باید 400 بده.
///
/// ```rust
/// use bloglist::utils::is_valid_id;
///
/// assert!(is_valid_id("V1StGXR8_Z5jdHi6B-myT"));
/// assert!(!is_valid_id("unknownPath"));
/// ```
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    VALID_ID.is_match(id)
}

// =====================================
// Token Utilities
// =====================================
/// استخراج توکن از header Authorization
///
/// پیشوند `Bearer` به بزرگی و کوچکی حروف حساس نیست.
///
/// # Format
/// `Authorization: Bearer <token>`
#[must_use]
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let prefix = header_value.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }

    let token = header_value[BEARER_PREFIX.len()..].trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Mask کردن بخشی از متن (برای لاگ‌ها)
///
/// ```rust
/// use bloglist::utils::mask_string;
///
/// assert_eq!(mask_string("secret123", 3), "sec***");
/// ```
#[must_use]
pub fn mask_string(text: &str, visible_chars: usize) -> String {
    if text.chars().count() <= visible_chars {
        return "*".repeat(text.chars().count());
    }

    let visible: String = text.chars().take(visible_chars).collect();
    format!("{}***", visible)
}

// =====================================
// Tests
// =====================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_valid() {
        for _ in 0..50 {
            assert!(is_valid_id(&generate_id()));
        }
    }

    #[test]
    fn test_invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("unknownPath"));
        assert!(!is_valid_id("V1StGXR8_Z5jdHi6B-my!"));
        assert!(!is_valid_id("V1StGXR8_Z5jdHi6B-myTT"));
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("Basic abc123"), None);
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("abc"), None);
    }

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string("secret123", 3), "sec***");
        assert_eq!(mask_string("ab", 5), "**");
    }
}
