//! 用户仓库 trait 定义

use crate::models::user::{User, UserCreate};
use crate::DatabaseResult;

/// 用户仓库trait定义
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    async fn get_user(&self, id: &str) -> DatabaseResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> DatabaseResult<Option<User>>;

    /// 创建用户，`username` 重复时返回唯一约束错误
    async fn create_user(&self, user: UserCreate) -> DatabaseResult<User>;
}
