//! Web服务模块
//!
//! 提供 HTTP API 接口和文档服务

use axum::http::HeaderValue;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use database::{
    BlogPostRepository, BlogPostRepositoryTrait, CompanyInfoRepository, CompanyInfoRepositoryTrait, DatabasePool,
    InquiryRepository, InquiryRepositoryTrait, PricingPlanRepository, PricingPlanRepositoryTrait, ProjectRepository,
    ProjectRepositoryTrait,
};
use shared_lib::AppConfig;
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub mod extract;
pub mod models;
pub mod routes;

/// 应用共享状态
///
/// 仓库以 trait 对象保存，测试时可以换成内存实现
#[derive(Clone)]
pub struct AppState {
    pub project_repository: Arc<dyn ProjectRepositoryTrait>,
    pub blog_post_repository: Arc<dyn BlogPostRepositoryTrait>,
    pub pricing_plan_repository: Arc<dyn PricingPlanRepositoryTrait>,
    pub inquiry_repository: Arc<dyn InquiryRepositoryTrait>,
    pub company_info_repository: Arc<dyn CompanyInfoRepositoryTrait>,
}

impl AppState {
    /// 使用同一个连接池创建全部PostgreSQL仓库
    pub fn from_pool(pool: DatabasePool) -> Self {
        Self {
            project_repository: Arc::new(ProjectRepository::new(pool.clone())),
            blog_post_repository: Arc::new(BlogPostRepository::new(pool.clone())),
            pricing_plan_repository: Arc::new(PricingPlanRepository::new(pool.clone())),
            inquiry_repository: Arc::new(InquiryRepository::new(pool.clone())),
            company_info_repository: Arc::new(CompanyInfoRepository::new(pool)),
        }
    }
}

/// 根据配置生成CORS中间件，未配置允许的来源时放开全部来源
fn cors_layer(config: &AppConfig) -> Result<CorsLayer> {
    match &config.cors_allow_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("CORS_ALLOW_ORIGIN 不是合法的请求头: {origin}"))?;
            Ok(CorsLayer::new().allow_origin(origin).allow_methods(Any).allow_headers(Any))
        }
        None => {
            warn!("⚠️ 未设置 CORS_ALLOW_ORIGIN，允许所有来源跨域访问");
            Ok(CorsLayer::permissive())
        }
    }
}

/// 启动 Web 服务
///
/// 收到 `shutdown_rx` 的关闭信号后停止接收新连接，等待已有请求处理完毕再返回。
pub async fn start_web_service(
    config: Arc<AppConfig>,
    pool: DatabasePool,
    mut shutdown_rx: Receiver<bool>,
) -> Result<()> {
    let shared_state = AppState::from_pool(pool);

    let router = routes::create_app_router(shared_state)
        .layer(cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_addr();
    info!("🚀 启动 Web Service 在 {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .wrap_err_with(|| format!("无法监听地址 {bind_addr}"))?;

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            // 发送端被丢弃时同样视为关闭信号
            let _ = shutdown_rx.changed().await;
            info!("🛑 Web Service 正在关闭...");
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_lib::models::config::DatabaseConfig;

    fn config(cors_allow_origin: Option<&str>) -> AppConfig {
        AppConfig {
            database: DatabaseConfig {
                postgresql_conn_str: "postgres://localhost/studio".into(),
                max_connections: 10,
                min_connections: 1,
            },
            host: "127.0.0.1".into(),
            port: 5000,
            cors_allow_origin: cors_allow_origin.map(str::to_string),
        }
    }

    #[test]
    fn cors_accepts_configured_origin() {
        assert!(cors_layer(&config(Some("https://studio.test"))).is_ok());
        assert!(cors_layer(&config(None)).is_ok());
    }

    #[test]
    fn cors_rejects_invalid_origin() {
        assert!(cors_layer(&config(Some("bad\norigin"))).is_err());
    }
}
