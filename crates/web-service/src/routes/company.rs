//! 公司信息接口

use crate::extract::JsonBody;
use crate::models::company::CompanyInfoUpdate;
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use database::CompanyInfo;
use tracing::debug;
use validator::Validate;

#[utoipa::path(get,
    path = "/company",
    tag = "company",
    responses(
        (status = 200, description = "Company info"),
        (status = 404, description = "Company info not found"),
    ),
)]
pub async fn get_company_info(State(state): State<AppState>) -> Result<Json<CompanyInfo>, AppError> {
    let info = state
        .company_info_repository
        .get_company_info()
        .await?
        .ok_or_else(|| AppError::not_found("Company info not found"))?;

    Ok(Json(info))
}

/// 更新公司信息
///
/// 已有记录时合并传入的字段；还没有记录时用传入的字段创建，此时缺少必填字段会返回400
#[utoipa::path(put,
    path = "/company",
    tag = "company",
    request_body = CompanyInfoUpdate,
    responses(
        (status = 200, description = "Updated company info"),
        (status = 400, description = "Invalid company info data"),
    ),
)]
pub async fn update_company_info(
    State(state): State<AppState>,
    JsonBody(update): JsonBody<CompanyInfoUpdate>,
) -> Result<Json<CompanyInfo>, AppError> {
    debug!("🔄 更新公司信息 {:#?}", update);

    update.validate()?;

    let info = state.company_info_repository.update_company_info(update.into()).await?;

    Ok(Json(info))
}
