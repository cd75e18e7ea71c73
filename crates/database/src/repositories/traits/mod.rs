//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```text
//! #[async_trait::async_trait]
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` / `Sync`：Web 服务中多个并发请求会在不同线程上共享同一个仓库实例
//! - `'static`：仓库作为应用服务长期存活，不依赖短期引用
//!
//! Web 层通过 `Arc<dyn XxxRepositoryTrait>` 持有仓库，测试时可以替换为内存实现。
//!
//! ### 约定 ✅
//!
//! 1. 查询单条记录返回 `DatabaseResult<Option<T>>`，记录不存在是正常结果而不是错误
//! 2. 删除返回 `DatabaseResult<bool>`，表示是否真的删除了一行
//! 3. 更新只修改传入的字段（`Option::Some`），并刷新 `updated_at`；可空列使用 `Option<Option<T>>`，`Some(None)` 表示置为null
//! 4. 数据库故障统一通过 [`crate::DatabaseError`] 向上传播，仓库层不重试

pub mod blog_post;
pub mod company_info;
pub mod inquiry;
pub mod pricing_plan;
pub mod project;
pub mod user;

// 重新导出
pub use blog_post::BlogPostRepositoryTrait;
pub use company_info::CompanyInfoRepositoryTrait;
pub use inquiry::InquiryRepositoryTrait;
pub use pricing_plan::PricingPlanRepositoryTrait;
pub use project::ProjectRepositoryTrait;
pub use user::UserRepositoryTrait;
