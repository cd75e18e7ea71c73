//! 演示数据
//!
//! 数据以json形式编译进二进制文件，通过各个仓库写入数据库。

use crate::models::{BlogPostCreate, CompanyInfoCreate, PricingPlanCreate, ProjectCreate, UserCreate};
use crate::repositories::blog_post::insert_blog_post;
use crate::repositories::company_info::upsert_company_info;
use crate::repositories::pricing_plan::insert_pricing_plan;
use crate::repositories::project::insert_project;
use crate::repositories::user::{find_user_by_username, insert_user};
use crate::{DatabaseError, DatabasePool, DatabaseResult};
use serde::Deserialize;
use tracing::info;

const DEMO_DATA: &str = include_str!("seed/demo_data.json");

/// 演示数据集合
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoData {
    pub company_info: CompanyInfoCreate,
    pub pricing_plans: Vec<PricingPlanCreate>,
    pub projects: Vec<ProjectCreate>,
    pub blog_posts: Vec<BlogPostCreate>,
}

impl DemoData {
    /// 解析内置的演示数据
    pub fn load() -> DatabaseResult<Self> {
        serde_json::from_str(DEMO_DATA).map_err(|e| DatabaseError::validation(format!("演示数据格式错误: {e}")))
    }
}

/// 写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// 管理员已存在，没有写入任何数据
    AlreadySeeded,
    Seeded {
        pricing_plans: usize,
        projects: usize,
        blog_posts: usize,
    },
}

/// 写入管理员账号和全部演示数据
///
/// 以管理员用户名是否存在作为"已经初始化过"的判断依据，重复执行不会产生重复数据。
/// 全部数据在同一个事务中写入，中途失败不会留下部分数据，修复问题后可以直接重新执行。
/// `admin.password` 必须是已经哈希过的密码。
pub async fn seed_demo_data(pool: &DatabasePool, admin: UserCreate) -> DatabaseResult<SeedOutcome> {
    let data = DemoData::load()?;

    let mut tx = pool.begin().await?;

    if find_user_by_username(&mut *tx, &admin.username).await?.is_some() {
        return Ok(SeedOutcome::AlreadySeeded);
    }

    let user = insert_user(&mut *tx, admin).await?;
    info!("✅ 管理员账号已创建: {}", user.username);

    let company = upsert_company_info(&mut *tx, data.company_info.into()).await?;
    info!("✅ 公司信息已写入: {}", company.company_name);

    let pricing_plans = data.pricing_plans.len();
    for plan in data.pricing_plans {
        insert_pricing_plan(&mut *tx, plan).await?;
    }
    info!("✅ 已写入 {} 个价格方案", pricing_plans);

    let projects = data.projects.len();
    for project in data.projects {
        insert_project(&mut *tx, project).await?;
    }
    info!("✅ 已写入 {} 个项目", projects);

    let blog_posts = data.blog_posts.len();
    for post in data.blog_posts {
        insert_blog_post(&mut *tx, post).await?;
    }
    info!("✅ 已写入 {} 篇文章", blog_posts);

    tx.commit().await?;

    Ok(SeedOutcome::Seeded {
        pricing_plans,
        projects,
        blog_posts,
    })
}
