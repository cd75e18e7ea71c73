//! 博客文章仓库 trait 定义

use crate::models::blog_post::{BlogPost, BlogPostCreate, BlogPostUpdate};
use crate::DatabaseResult;

/// 博客文章仓库trait定义
#[async_trait::async_trait]
pub trait BlogPostRepositoryTrait: Send + Sync + 'static {
    /// 获取文章列表，按创建时间倒序（最新的在前）
    ///
    /// # 参数
    /// - `published`: 为 `Some` 时只返回 `published` 等于该值的文章，为 `None` 时返回全部
    async fn get_all_blog_posts(&self, published: Option<bool>) -> DatabaseResult<Vec<BlogPost>>;

    /// 根据 ID 获取文章
    async fn get_blog_post_by_id(&self, id: &str) -> DatabaseResult<Option<BlogPost>>;

    /// 根据 slug 获取文章
    async fn get_blog_post_by_slug(&self, slug: &str) -> DatabaseResult<Option<BlogPost>>;

    /// 创建文章
    ///
    /// slug 重复时返回唯一约束错误
    async fn create_blog_post(&self, post: BlogPostCreate) -> DatabaseResult<BlogPost>;

    /// 更新文章，文章不存在时返回 `None`
    async fn update_blog_post(&self, id: &str, update: BlogPostUpdate) -> DatabaseResult<Option<BlogPost>>;

    /// 删除文章，返回是否真的删除了一条记录
    async fn delete_blog_post(&self, id: &str) -> DatabaseResult<bool>;
}
