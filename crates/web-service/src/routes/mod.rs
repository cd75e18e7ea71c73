//! 路由入口
//!
//! 提供 [`create_app_router`] 函数，导出当前App的所有路由。
//!
//! 用户可以在导出路由时传入共享数据 shared_state，这样所有路由函数都可以访问。

use crate::routes::blog::__path_create_blog_post;
use crate::routes::blog::__path_delete_blog_post;
use crate::routes::blog::__path_get_blog_post;
use crate::routes::blog::__path_get_blog_post_by_slug;
use crate::routes::blog::__path_list_blog_posts;
use crate::routes::blog::__path_update_blog_post;
use crate::routes::blog::{
    create_blog_post, delete_blog_post, get_blog_post, get_blog_post_by_slug, list_blog_posts, update_blog_post,
};
use crate::routes::company::__path_get_company_info;
use crate::routes::company::__path_update_company_info;
use crate::routes::company::{get_company_info, update_company_info};
use crate::routes::health::__path_health_check;
use crate::routes::health::health_check;
use crate::routes::inquiries::__path_create_inquiry;
use crate::routes::inquiries::__path_delete_inquiry;
use crate::routes::inquiries::__path_get_inquiry;
use crate::routes::inquiries::__path_list_inquiries;
use crate::routes::inquiries::__path_update_inquiry_status;
use crate::routes::inquiries::{create_inquiry, delete_inquiry, get_inquiry, list_inquiries, update_inquiry_status};
use crate::routes::pricing::__path_create_pricing_plan;
use crate::routes::pricing::__path_delete_pricing_plan;
use crate::routes::pricing::__path_get_pricing_plan;
use crate::routes::pricing::__path_list_pricing_plans;
use crate::routes::pricing::__path_update_pricing_plan;
use crate::routes::pricing::{
    create_pricing_plan, delete_pricing_plan, get_pricing_plan, list_pricing_plans, update_pricing_plan,
};
use crate::routes::projects::__path_create_project;
use crate::routes::projects::__path_delete_project;
use crate::routes::projects::__path_get_project;
use crate::routes::projects::__path_list_featured_projects;
use crate::routes::projects::__path_list_projects;
use crate::routes::projects::__path_update_project;
use crate::routes::projects::{
    create_project, delete_project, get_project, list_featured_projects, list_projects, update_project,
};
use crate::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_scalar::{Scalar, Servable};

pub mod blog;
pub mod company;
pub mod health;
pub mod inquiries;
pub mod pricing;
pub mod projects;

/// 导出当前App的所有路由
///
/// ## 参数定义
/// - state: 共享数据，参考 [`AppState`] 定义。存放各个仓库实例。
///
/// ## **❗️注意事项：**
///
/// 由于 [`routes!`] 宏限制，在同一个宏里面不能同时定义多个相同类型的http接口。
/// 不能这样定义：
///
/// ```text
/// routes!(get, get, post)
/// ```
///
/// 这样会导致Panic
///
/// 需要拆开定义
///
/// ```text
/// routes!(get, post)
/// .routes!(get)
/// ```
///
fn routers(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_projects, create_project))
        .routes(routes!(list_featured_projects))
        .routes(routes!(get_project, update_project, delete_project))
        .routes(routes!(list_blog_posts, create_blog_post))
        .routes(routes!(get_blog_post_by_slug))
        .routes(routes!(get_blog_post, update_blog_post, delete_blog_post))
        .routes(routes!(list_pricing_plans, create_pricing_plan))
        .routes(routes!(get_pricing_plan, update_pricing_plan, delete_pricing_plan))
        .routes(routes!(list_inquiries, create_inquiry))
        .routes(routes!(get_inquiry, delete_inquiry))
        .routes(routes!(update_inquiry_status))
        .routes(routes!(get_company_info, update_company_info))
        .routes(routes!(health_check))
        .with_state(state)
}

/// 创建当前App的路由
///
/// 完成以下功能：
/// - 生成OpenAPI文档
/// - 生成App路由，全部挂载在 `/api` 下
/// - 使用Scalar作为最终在线文档格式
///
/// 由于使用了 `utoipa` 库来自动化生成`openapi`文档，因此我们没有使用原生的 [`Router`]，而是使用了
/// [`OpenApiRouter`] 。
pub fn create_app_router(shared_state: AppState) -> Router {
    // 当前项目的OpenAPI声明
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "projects", description = "作品集项目"),
            (name = "blog", description = "博客文章"),
            (name = "pricing", description = "价格方案"),
            (name = "inquiries", description = "客户咨询"),
            (name = "company", description = "公司信息"),
            (name = "health", description = "健康检查"),
        ),
    )]
    struct ApiDoc;

    // 使用`utoipa_axum`提供的OpenApiRouter来创建路由。
    // 最终拿到的变量：
    // - router: Axum的Router，实际的路由对象
    // - api: utoipa的OpenApi，生成的OpenAPI对象
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routers(shared_state))
        .split_for_parts();

    // 合并文档路由，用户可通过 /docs 访问文档网页地址
    router.merge(Scalar::with_url("/docs", api))
}
