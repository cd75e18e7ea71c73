//! 客户咨询数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 新咨询的初始状态
pub const DEFAULT_INQUIRY_STATUS: &str = "new";

/// 客户咨询
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub budget: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// 咨询创建参数
///
/// 不包含 `status`，新记录总是使用数据库默认值 [`DEFAULT_INQUIRY_STATUS`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub budget: Option<String>,
    pub message: String,
}
