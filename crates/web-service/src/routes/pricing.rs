//! 价格方案接口

use crate::extract::JsonBody;
use crate::models::err::AppError;
use crate::models::pricing::{PricingPlanCreate, PricingPlanUpdate, PricingQuery};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::PricingPlan;
use tracing::debug;
use validator::Validate;

/// 获取价格方案，按 `order` 从大到小排序
#[utoipa::path(get,
    path = "/pricing",
    tag = "pricing",
    params(PricingQuery),
    responses((status = 200, description = "Pricing plans")),
)]
pub async fn list_pricing_plans(
    State(state): State<AppState>,
    Query(query): Query<PricingQuery>,
) -> Result<Json<Vec<PricingPlan>>, AppError> {
    let plans = state
        .pricing_plan_repository
        .get_all_pricing_plans(query.active_only())
        .await?;

    Ok(Json(plans))
}

#[utoipa::path(get,
    path = "/pricing/{id}",
    tag = "pricing",
    params(("id" = String, Path, description = "Pricing plan id")),
    responses(
        (status = 200, description = "The pricing plan"),
        (status = 404, description = "Pricing plan not found"),
    ),
)]
pub async fn get_pricing_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PricingPlan>, AppError> {
    let plan = state
        .pricing_plan_repository
        .get_pricing_plan_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Pricing plan not found"))?;

    Ok(Json(plan))
}

#[utoipa::path(post,
    path = "/pricing",
    tag = "pricing",
    request_body = PricingPlanCreate,
    responses(
        (status = 201, description = "Created pricing plan"),
        (status = 400, description = "Invalid pricing plan data"),
    ),
)]
pub async fn create_pricing_plan(
    State(state): State<AppState>,
    JsonBody(plan): JsonBody<PricingPlanCreate>,
) -> Result<(StatusCode, Json<PricingPlan>), AppError> {
    debug!("📝 创建价格方案 {:#?}", plan);

    plan.validate()?;

    let plan = state.pricing_plan_repository.create_pricing_plan(plan.into()).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

#[utoipa::path(put,
    path = "/pricing/{id}",
    tag = "pricing",
    params(("id" = String, Path, description = "Pricing plan id")),
    request_body = PricingPlanUpdate,
    responses(
        (status = 200, description = "Updated pricing plan"),
        (status = 400, description = "Invalid pricing plan data"),
        (status = 404, description = "Pricing plan not found"),
    ),
)]
pub async fn update_pricing_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<PricingPlanUpdate>,
) -> Result<Json<PricingPlan>, AppError> {
    debug!("🔄 更新价格方案 {} {:#?}", id, update);

    update.validate()?;

    let plan = state
        .pricing_plan_repository
        .update_pricing_plan(&id, update.into())
        .await?
        .ok_or_else(|| AppError::not_found("Pricing plan not found"))?;

    Ok(Json(plan))
}

#[utoipa::path(delete,
    path = "/pricing/{id}",
    tag = "pricing",
    params(("id" = String, Path, description = "Pricing plan id")),
    responses(
        (status = 204, description = "Pricing plan deleted"),
        (status = 404, description = "Pricing plan not found"),
    ),
)]
pub async fn delete_pricing_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("🗑️ 删除价格方案 {}", id);

    if state.pricing_plan_repository.delete_pricing_plan(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Pricing plan not found"))
    }
}
