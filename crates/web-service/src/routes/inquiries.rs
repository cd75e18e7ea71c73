//! 客户咨询接口

use crate::extract::JsonBody;
use crate::models::err::AppError;
use crate::models::inquiries::{InquiryCreate, InquiryStatusUpdate};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::Inquiry;
use tracing::{debug, info};
use validator::Validate;

/// 获取全部咨询，最新的在前
#[utoipa::path(get,
    path = "/inquiries",
    tag = "inquiries",
    responses((status = 200, description = "Inquiries, newest first")),
)]
pub async fn list_inquiries(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, AppError> {
    let inquiries = state.inquiry_repository.get_all_inquiries().await?;

    Ok(Json(inquiries))
}

#[utoipa::path(get,
    path = "/inquiries/{id}",
    tag = "inquiries",
    params(("id" = String, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "The inquiry"),
        (status = 404, description = "Inquiry not found"),
    ),
)]
pub async fn get_inquiry(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Inquiry>, AppError> {
    let inquiry = state
        .inquiry_repository
        .get_inquiry_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Inquiry not found"))?;

    Ok(Json(inquiry))
}

/// 提交咨询
///
/// 新咨询的状态总是 `new`
#[utoipa::path(post,
    path = "/inquiries",
    tag = "inquiries",
    request_body = InquiryCreate,
    responses(
        (status = 201, description = "Created inquiry"),
        (status = 400, description = "Invalid inquiry data"),
    ),
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    JsonBody(inquiry): JsonBody<InquiryCreate>,
) -> Result<(StatusCode, Json<Inquiry>), AppError> {
    inquiry.validate()?;

    let inquiry = state.inquiry_repository.create_inquiry(inquiry.into()).await?;
    info!("📬 收到新的咨询: {} ({})", inquiry.id, inquiry.service);

    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// 修改咨询状态
///
/// 状态值不做枚举限制，只要求非空；空白字符不会被去掉
#[utoipa::path(patch,
    path = "/inquiries/{id}/status",
    tag = "inquiries",
    params(("id" = String, Path, description = "Inquiry id")),
    request_body = InquiryStatusUpdate,
    responses(
        (status = 200, description = "Updated inquiry"),
        (status = 400, description = "Status is required"),
        (status = 404, description = "Inquiry not found"),
    ),
)]
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<InquiryStatusUpdate>,
) -> Result<Json<Inquiry>, AppError> {
    let status = update.status().ok_or_else(|| AppError::bad_request("Status is required"))?;
    debug!("🔄 更新咨询 {} 状态为 {}", id, status);

    let inquiry = state
        .inquiry_repository
        .update_inquiry_status(&id, status)
        .await?
        .ok_or_else(|| AppError::not_found("Inquiry not found"))?;

    Ok(Json(inquiry))
}

#[utoipa::path(delete,
    path = "/inquiries/{id}",
    tag = "inquiries",
    params(("id" = String, Path, description = "Inquiry id")),
    responses(
        (status = 204, description = "Inquiry deleted"),
        (status = 404, description = "Inquiry not found"),
    ),
)]
pub async fn delete_inquiry(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    debug!("🗑️ 删除咨询 {}", id);

    if state.inquiry_repository.delete_inquiry(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Inquiry not found"))
    }
}
