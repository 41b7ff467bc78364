//! # Bloglist - نقطه ورود برنامه
//!
//! این فایل نقطه شروع اجرای سرور است.
//!
//! ## مفاهیم Rust در این فایل:
//! - `async fn main()`: تابع اصلی غیرهمزمان با tokio
//! - `Result<T, E>`: مدیریت خطا
//! - `?` operator: انتشار خطا به بالا

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bloglist::{
    api::create_router,
    config::{Config, Environment},
    database::Database,
    error::{AppError, Result},
};

/// نقطه ورود اصلی برنامه
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات لود نشن یا نامعتبر باشن
/// - دیتابیس متصل نشه
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.environment);

    info!(environment = ?config.environment, "🚀 Starting Bloglist Service...");

    config.validate()?;
    info!("✅ Configuration loaded successfully");

    let database = Database::connect(&config.database_url).await?;
    info!("✅ Database connected successfully");

    database.migrate().await?;
    info!("✅ Database migrations applied");

    let addr = config.server_addr();
    let app = create_router(database, config);

    let listener = TcpListener::bind(&addr).await?;
    info!("🌐 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// # مفاهیم:
/// - EnvFilter: فیلتر کردن لاگ‌ها بر اساس `RUST_LOG`
/// - در production خروجی JSON، بقیه جاها فرمت pretty
fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bloglist=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if environment.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)           // نمایش نام ماژول
                    .with_file(true)             // نمایش نام فایل
                    .with_line_number(true)      // نمایش شماره خط
                    .pretty(),
            )
            .init();
    }
}
