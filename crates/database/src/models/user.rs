//! 用户数据库模型

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// 新用户的默认角色
pub const DEFAULT_USER_ROLE: &str = "admin";

/// 用户信息结构体
///
/// `password` 保存的是 bcrypt 哈希值，序列化时会被跳过
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// 用户创建参数
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub username: String,
    /// 已经哈希过的密码
    pub password: String,
    pub role: String,
}
