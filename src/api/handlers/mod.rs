//! # HTTP Handlers
//!
//! این ماژول handler‌های HTTP رو تعریف میکنه.
//!
//! ## Handler چیه؟
//! تابعی که request میگیره و response برمیگردونه.
//! در axum، هر handler یک async function هست.
//!
//! Handler‌ها فقط داده رو از request درمیارن و به سرویس میدن؛
//! منطق اصلی در `services` هست.

pub mod blogs;
pub mod users;
pub mod login;
pub mod health;
pub mod stats;
