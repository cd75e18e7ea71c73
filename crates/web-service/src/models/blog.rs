use database::DEFAULT_AUTHOR;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 文章列表查询参数
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BlogQuery {
    /// 只接受 `true` / `false`，其他值视为不过滤
    pub published: Option<String>,
}

impl BlogQuery {
    pub fn published_filter(&self) -> Option<bool> {
        match self.published.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }
}

/// 创建文章的请求体
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostCreate {
    #[validate(length(min = 1))]
    pub title: String,

    /// 全局唯一的url标识
    #[schema(example = "getting-started-react-typescript")]
    #[validate(length(min = 1))]
    pub slug: String,

    #[validate(length(min = 1))]
    pub excerpt: String,

    /// Markdown 正文
    #[validate(length(min = 1))]
    pub content: String,

    #[validate(length(min = 1))]
    pub cover_image: String,

    #[serde(default = "default_author")]
    #[schema(example = "Team")]
    pub author: String,

    #[validate(length(min = 1))]
    pub category: String,

    pub tags: Vec<String>,

    #[serde(default = "default_published")]
    pub published: bool,

    /// 预计阅读时长（分钟）
    #[schema(example = 5)]
    #[validate(range(min = 0))]
    pub read_time: i32,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_published() -> bool {
    true
}

/// 更新文章的请求体
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostUpdate {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    #[validate(range(min = 0))]
    pub read_time: Option<i32>,
}

impl From<BlogPostCreate> for database::BlogPostCreate {
    fn from(post: BlogPostCreate) -> Self {
        Self {
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            cover_image: post.cover_image,
            author: post.author,
            category: post.category,
            tags: post.tags,
            published: post.published,
            read_time: post.read_time,
        }
    }
}

impl From<BlogPostUpdate> for database::BlogPostUpdate {
    fn from(update: BlogPostUpdate) -> Self {
        Self {
            title: update.title,
            slug: update.slug,
            excerpt: update.excerpt,
            content: update.content,
            cover_image: update.cover_image,
            author: update.author,
            category: update.category,
            tags: update.tags,
            published: update.published,
            read_time: update.read_time,
        }
    }
}
