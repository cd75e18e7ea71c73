//! 写入演示数据
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run --bin seed
//! ```
//!
//! 管理员密码默认为 `admin123`，可通过 `SEED_ADMIN_PASSWORD` 修改。

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::{initialize_database, seed_demo_data, SeedOutcome, UserCreate, DEFAULT_USER_ROLE};
use shared_lib::{init_tracing, AppConfig};
use tracing::info;

const ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = AppConfig::load()?;
    let pool = initialize_database(config).await?;

    info!("🌱 开始写入演示数据...");

    let password = std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
    // bcrypt 计算比较耗时，放到阻塞线程池中执行
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await?
        .wrap_err("管理员密码哈希失败")?;

    let admin = UserCreate {
        username: ADMIN_USERNAME.to_string(),
        password: hashed,
        role: DEFAULT_USER_ROLE.to_string(),
    };

    match seed_demo_data(&pool, admin).await.wrap_err("写入演示数据失败")? {
        SeedOutcome::AlreadySeeded => info!("⏭️ 管理员账号 {} 已存在，数据库已经初始化过", ADMIN_USERNAME),
        SeedOutcome::Seeded {
            pricing_plans,
            projects,
            blog_posts,
        } => info!(
            "🎉 演示数据写入完成: {} 个价格方案, {} 个项目, {} 篇文章",
            pricing_plans, projects, blog_posts
        ),
    }

    pool.close().await;
    Ok(())
}
