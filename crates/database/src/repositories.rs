//! 数据库仓库模块
//!
//! 这里定义数据库操作的Repository层

pub mod blog_post;
pub mod company_info;
pub mod inquiry;
pub mod pricing_plan;
pub mod project;
pub mod traits;
pub mod user;

// 重新导出具体的类型
pub use blog_post::BlogPostRepository;
pub use company_info::CompanyInfoRepository;
pub use inquiry::InquiryRepository;
pub use pricing_plan::PricingPlanRepository;
pub use project::ProjectRepository;
pub use traits::{
    BlogPostRepositoryTrait, CompanyInfoRepositoryTrait, InquiryRepositoryTrait, PricingPlanRepositoryTrait,
    ProjectRepositoryTrait, UserRepositoryTrait,
};
pub use user::UserRepository;

/// 集成测试使用的连接池，需要设置 `DATABASE_URL`
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("集成测试需要设置 DATABASE_URL");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("无法连接测试数据库");

    crate::connection::run_migrations(&pool).await.expect("数据库迁移失败");
    pool
}

/// 公司信息表全局只有一行，读写它的集成测试需要串行执行
#[cfg(test)]
pub(crate) fn company_info_test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
