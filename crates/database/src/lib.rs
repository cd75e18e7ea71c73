//! 数据库操作模块
//!
//! 这个模块提供了数据库连接、迁移、查询等功能

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use connection::{initialize_database, run_migrations, DatabasePool};
pub use error::DatabaseError;
pub use models::{
    BlogPost, BlogPostCreate, BlogPostUpdate, CompanyInfo, CompanyInfoCreate, CompanyInfoUpdate, Inquiry,
    InquiryCreate, PricingPlan, PricingPlanCreate, PricingPlanUpdate, Project, ProjectCreate, ProjectUpdate,
    SocialMedia, User, UserCreate, DEFAULT_AUTHOR, DEFAULT_CURRENCY, DEFAULT_INQUIRY_STATUS, DEFAULT_USER_ROLE,
};
pub use repositories::{
    BlogPostRepository, BlogPostRepositoryTrait, CompanyInfoRepository, CompanyInfoRepositoryTrait,
    InquiryRepository, InquiryRepositoryTrait, PricingPlanRepository, PricingPlanRepositoryTrait, ProjectRepository,
    ProjectRepositoryTrait, UserRepository, UserRepositoryTrait,
};
pub use seed::{seed_demo_data, DemoData, SeedOutcome};

/// 数据库操作结果类型
pub type DatabaseResult<T> = Result<T, DatabaseError>;
