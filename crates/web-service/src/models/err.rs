use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// 返回给客户端的通用错误信息，具体原因只写入日志
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error("Validate failed: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体无法解析或缺少必要参数
    #[error("{0}")]
    BadRequest(String),

    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

impl AppError {
    pub fn bad_request<T: ToString>(msg: T) -> Self {
        Self::BadRequest(msg.to_string())
    }

    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Tell axum how to convert `AppError` into a response.
///
/// 响应体统一为 `{"error": "..."}`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // 首次写入公司信息时缺少必填字段
            AppError::RepositoryError(DatabaseError::ValidationError(msg)) => (StatusCode::BAD_REQUEST, msg),
            // 重复的 slug 等，属于请求数据问题，不需要按故障报警
            AppError::RepositoryError(err) if err.is_unique_violation() => {
                warn!("⚠️ 违反唯一约束: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
            AppError::RepositoryError(err) => {
                error!("❌ 数据库操作失败: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
            AppError::InternalError(err) => {
                error!("❌ 内部错误: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
