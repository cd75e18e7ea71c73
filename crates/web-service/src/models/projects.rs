use crate::models::nullable;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// 创建项目的请求体
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    #[schema(example = "E-Commerce Platform")]
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub long_description: Option<String>,

    #[schema(example = "E-Commerce")]
    #[validate(length(min = 1))]
    pub category: String,

    #[validate(length(min = 1))]
    pub image_url: String,

    /// 使用的技术栈，保持传入顺序
    #[schema(example = json!(["React", "Node.js"]))]
    pub technologies: Vec<String>,

    pub live_url: Option<String>,

    pub github_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    /// 排序权重，越大越靠前
    #[serde(default)]
    pub order: i32,
}

/// 更新项目的请求体，未传入的字段保持不变
///
/// `longDescription`、`liveUrl`、`githubUrl` 传入null时清空
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub long_description: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    pub technologies: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub live_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub github_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub order: Option<i32>,
}

impl From<ProjectCreate> for database::ProjectCreate {
    fn from(project: ProjectCreate) -> Self {
        Self {
            title: project.title,
            description: project.description,
            long_description: project.long_description,
            category: project.category,
            image_url: project.image_url,
            technologies: project.technologies,
            live_url: project.live_url,
            github_url: project.github_url,
            featured: project.featured,
            order: project.order,
        }
    }
}

impl From<ProjectUpdate> for database::ProjectUpdate {
    fn from(update: ProjectUpdate) -> Self {
        Self {
            title: update.title,
            description: update.description,
            long_description: update.long_description,
            category: update.category,
            image_url: update.image_url,
            technologies: update.technologies,
            live_url: update.live_url,
            github_url: update.github_url,
            featured: update.featured,
            order: update.order,
        }
    }
}
