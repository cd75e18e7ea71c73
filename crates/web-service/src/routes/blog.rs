//! 博客文章接口

use crate::extract::JsonBody;
use crate::models::blog::{BlogPostCreate, BlogPostUpdate, BlogQuery};
use crate::models::err::AppError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::BlogPost;
use tracing::debug;
use validator::Validate;

/// 获取文章列表，按创建时间倒序
///
/// `?published=true|false` 按发布状态过滤，不传（或其他值）返回全部文章
#[utoipa::path(get,
    path = "/blog",
    tag = "blog",
    params(BlogQuery),
    responses((status = 200, description = "Blog posts, newest first")),
)]
pub async fn list_blog_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Result<Json<Vec<BlogPost>>, AppError> {
    let published = query.published_filter();
    debug!("🔍 获取文章列表, published: {:?}", published);

    let posts = state.blog_post_repository.get_all_blog_posts(published).await?;

    Ok(Json(posts))
}

#[utoipa::path(get,
    path = "/blog/{id}",
    tag = "blog",
    params(("id" = String, Path, description = "Blog post id")),
    responses(
        (status = 200, description = "The blog post"),
        (status = 404, description = "Blog post not found"),
    ),
)]
pub async fn get_blog_post(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<BlogPost>, AppError> {
    let post = state
        .blog_post_repository
        .get_blog_post_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Blog post not found"))?;

    Ok(Json(post))
}

/// 根据 slug 获取文章
#[utoipa::path(get,
    path = "/blog/slug/{slug}",
    tag = "blog",
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "The blog post"),
        (status = 404, description = "Blog post not found"),
    ),
)]
pub async fn get_blog_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    let post = state
        .blog_post_repository
        .get_blog_post_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found("Blog post not found"))?;

    Ok(Json(post))
}

/// 创建文章
///
/// slug 重复属于数据库约束错误，返回500
#[utoipa::path(post,
    path = "/blog",
    tag = "blog",
    request_body = BlogPostCreate,
    responses(
        (status = 201, description = "Created blog post"),
        (status = 400, description = "Invalid blog post data"),
    ),
)]
pub async fn create_blog_post(
    State(state): State<AppState>,
    JsonBody(post): JsonBody<BlogPostCreate>,
) -> Result<(StatusCode, Json<BlogPost>), AppError> {
    debug!("📝 创建文章 {}", post.slug);

    post.validate()?;

    let post = state.blog_post_repository.create_blog_post(post.into()).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(put,
    path = "/blog/{id}",
    tag = "blog",
    params(("id" = String, Path, description = "Blog post id")),
    request_body = BlogPostUpdate,
    responses(
        (status = 200, description = "Updated blog post"),
        (status = 400, description = "Invalid blog post data"),
        (status = 404, description = "Blog post not found"),
    ),
)]
pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(update): JsonBody<BlogPostUpdate>,
) -> Result<Json<BlogPost>, AppError> {
    debug!("🔄 更新文章 {} {:#?}", id, update);

    update.validate()?;

    let post = state
        .blog_post_repository
        .update_blog_post(&id, update.into())
        .await?
        .ok_or_else(|| AppError::not_found("Blog post not found"))?;

    Ok(Json(post))
}

#[utoipa::path(delete,
    path = "/blog/{id}",
    tag = "blog",
    params(("id" = String, Path, description = "Blog post id")),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 404, description = "Blog post not found"),
    ),
)]
pub async fn delete_blog_post(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    debug!("🗑️ 删除文章 {}", id);

    if state.blog_post_repository.delete_blog_post(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Blog post not found"))
    }
}
