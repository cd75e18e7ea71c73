//! 作品集项目接口
//!

use crate::extract::JsonBody;
use crate::models::err::AppError;
use crate::models::projects::{ProjectCreate, ProjectUpdate};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use database::Project;
use tracing::debug;
use validator::Validate;

/// 获取全部项目
///
/// 按 `order` 从大到小排序。
///
/// 注意：**强烈建议**在handler上开启 [`axum::debug_handler`] 宏，否则错误提示信息可能不是很明确。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<Vec<Project>>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，字段名为camelCase
/// 2. [`AppError`] 是错误时返回的Error类型，数据库故障会转换为500错误信息，具体原因只记录在日志中
#[utoipa::path(get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects ordered by `order` descending"),
        (status = 500, description = "Database failure"),
    ),
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    debug!("🔍 获取项目列表");

    let projects = state.project_repository.get_all_projects().await?;

    Ok(Json(projects))
}

/// 获取精选项目
#[utoipa::path(get,
    path = "/projects/featured",
    tag = "projects",
    responses((status = 200, description = "Featured projects ordered by `order` descending")),
)]
pub async fn list_featured_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    debug!("🔍 获取精选项目");

    let projects = state.project_repository.get_featured_projects().await?;

    Ok(Json(projects))
}

/// 查询指定项目信息
#[utoipa::path(get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project"),
        (status = 404, description = "Project not found"),
    ),
)]
pub async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Project>, AppError> {
    debug!("🔍 获取项目 {}", id);

    let project = state
        .project_repository
        .get_project_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(Json(project))
}

/// 创建项目
///
/// 根据用户输入参数创建项目信息，成功时返回201
#[utoipa::path(post,
    path = "/projects",
    tag = "projects",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Created project"),
        (status = 400, description = "Invalid project data"),
    ),
)]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(project): JsonBody<ProjectCreate>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    debug!("📝 创建项目 {:#?}", project);

    // 验证输入参数，确保有效性
    project.validate()?;

    let project = state.project_repository.create_project(project.into()).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// 更新项目信息
///
/// 根据用户指定的 `id` 和 修改信息 [`ProjectUpdate`] 来更新项目信息，未传入的字段保持不变。
#[utoipa::path(put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    request_body = ProjectUpdate,
    responses(
        (status = 200, description = "Updated project"),
        (status = 400, description = "Invalid project data"),
        (status = 404, description = "Project not found"),
    ),
)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<ProjectUpdate>,
) -> Result<Json<Project>, AppError> {
    debug!("🔄 更新项目 {} {:#?}", id, update);

    update.validate()?;

    let project = state
        .project_repository
        .update_project(&id, update.into())
        .await?
        .ok_or_else(|| AppError::not_found("Project not found"))?;

    Ok(Json(project))
}

/// 删除指定的项目
#[utoipa::path(delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found"),
    ),
)]
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    debug!("🗑️ 删除项目 {}", id);

    if state.project_repository.delete_project(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Project not found"))
    }
}
