use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// 健康检查结果
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// RFC 3339 格式的服务器时间
    pub timestamp: String,
}

/// 健康检查，不访问数据库
#[utoipa::path(get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthStatus)),
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
