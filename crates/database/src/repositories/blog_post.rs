//! 博客文章仓库

use crate::models::blog_post::{BlogPost, BlogPostCreate, BlogPostUpdate};
use crate::repositories::traits::BlogPostRepositoryTrait;
use crate::DatabaseResult;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

/// 博客文章仓库结构体
#[derive(Debug, Clone)]
pub struct BlogPostRepository {
    pool: PgPool,
}

impl BlogPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BlogPostRepositoryTrait for BlogPostRepository {
    /// 获取文章列表
    ///
    /// `$1` 为null时不过滤，和项目搜索一样用一条SQL处理可选参数
    async fn get_all_blog_posts(&self, published: Option<bool>) -> DatabaseResult<Vec<BlogPost>> {
        debug!("🔍 获取文章列表, published: {:?}", published);

        let posts = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, slug, excerpt, content, cover_image, author, category, tags,
                   published, read_time, created_at, updated_at
            FROM blog_posts
            WHERE ($1::boolean IS NULL OR published = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(published)
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 找到 {} 篇文章", posts.len());
        Ok(posts)
    }

    async fn get_blog_post_by_id(&self, id: &str) -> DatabaseResult<Option<BlogPost>> {
        debug!("🔍 根据 ID 获取文章: {}", id);

        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, slug, excerpt, content, cover_image, author, category, tags,
                   published, read_time, created_at, updated_at
            FROM blog_posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> DatabaseResult<Option<BlogPost>> {
        debug!("🔍 根据 slug 获取文章: {}", slug);

        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT id, title, slug, excerpt, content, cover_image, author, category, tags,
                   published, read_time, created_at, updated_at
            FROM blog_posts
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn create_blog_post(&self, post: BlogPostCreate) -> DatabaseResult<BlogPost> {
        insert_blog_post(&self.pool, post).await
    }

    async fn update_blog_post(&self, id: &str, update: BlogPostUpdate) -> DatabaseResult<Option<BlogPost>> {
        debug!("🔄 更新文章 {} 信息: {:#?}", id, update);

        let post = sqlx::query_as::<_, BlogPost>(
            r#"
            UPDATE blog_posts
            SET title = coalesce($2, title),
                slug = coalesce($3, slug),
                excerpt = coalesce($4, excerpt),
                content = coalesce($5, content),
                cover_image = coalesce($6, cover_image),
                author = coalesce($7, author),
                category = coalesce($8, category),
                tags = coalesce($9, tags),
                published = coalesce($10, published),
                read_time = coalesce($11, read_time),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, slug, excerpt, content, cover_image, author, category, tags,
                      published, read_time, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.slug)
        .bind(update.excerpt)
        .bind(update.content)
        .bind(update.cover_image)
        .bind(update.author)
        .bind(update.category)
        .bind(update.tags)
        .bind(update.published)
        .bind(update.read_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn delete_blog_post(&self, id: &str) -> DatabaseResult<bool> {
        debug!("🗑️ 删除文章: {}", id);

        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// 写入文章，`executor` 可以是连接池也可以是事务
pub(crate) async fn insert_blog_post<'e, E>(executor: E, post: BlogPostCreate) -> DatabaseResult<BlogPost>
where
    E: PgExecutor<'e>,
{
    debug!("📝 创建文章: {}", post.slug);

    let post = sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, slug, excerpt, content, cover_image, author, category, tags,
                                published, read_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, title, slug, excerpt, content, cover_image, author, category, tags,
                  published, read_time, created_at, updated_at
        "#,
    )
    .bind(&post.title)
    .bind(&post.slug)
    .bind(&post.excerpt)
    .bind(&post.content)
    .bind(&post.cover_image)
    .bind(&post.author)
    .bind(&post.category)
    .bind(&post.tags)
    .bind(post.published)
    .bind(post.read_time)
    .fetch_one(executor)
    .await?;

    debug!("✅ 文章创建成功: {}", post.id);
    Ok(post)
}
