//! 博客文章数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 文章作者的默认值
pub const DEFAULT_AUTHOR: &str = "Team";

/// 博客文章
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// 全表唯一
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub published: bool,
    /// 预计阅读时长（分钟）
    pub read_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 博客文章创建参数
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostCreate {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    #[serde(default = "default_author")]
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default = "default_published")]
    pub published: bool,
    pub read_time: i32,
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_published() -> bool {
    true
}

/// 博客文章更新参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub read_time: Option<i32>,
}
