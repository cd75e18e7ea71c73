//! 数据库模型模块
//!
//! 这里定义与数据库表对应的结构体和相关操作

pub mod blog_post;
pub mod company_info;
pub mod inquiry;
pub mod pricing_plan;
pub mod project;
pub mod user;

// 重新导出具体的模型
pub use blog_post::{BlogPost, BlogPostCreate, BlogPostUpdate, DEFAULT_AUTHOR};
pub use company_info::{CompanyInfo, CompanyInfoCreate, CompanyInfoUpdate, SocialMedia};
pub use inquiry::{Inquiry, InquiryCreate, DEFAULT_INQUIRY_STATUS};
pub use pricing_plan::{PricingPlan, PricingPlanCreate, PricingPlanUpdate, DEFAULT_CURRENCY};
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use user::{User, UserCreate, DEFAULT_USER_ROLE};
