//! 项目数据库模型
//!
//! 定义作品集项目相关的数据库模型结构体

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 项目信息结构体
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    /// 排序权重，越大越靠前
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 项目创建参数
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub order: i32,
}

/// 项目更新参数
///
/// 为None的字段保持数据库中的原值。
/// 可空字段使用两层 [`Option`]：`Some(None)` 表示把该列置为null。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<Option<String>>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub live_url: Option<Option<String>>,
    pub github_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}
