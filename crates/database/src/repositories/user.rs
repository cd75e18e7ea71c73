//! 用户仓库

use crate::models::user::{User, UserCreate};
use crate::repositories::traits::UserRepositoryTrait;
use crate::DatabaseResult;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

/// 用户仓库结构体
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn get_user(&self, id: &str) -> DatabaseResult<Option<User>> {
        debug!("🔍 根据 ID 获取用户: {}", id);

        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        find_user_by_username(&self.pool, username).await
    }

    async fn create_user(&self, user: UserCreate) -> DatabaseResult<User> {
        insert_user(&self.pool, user).await
    }
}

pub(crate) async fn find_user_by_username<'e, E>(executor: E, username: &str) -> DatabaseResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    debug!("🔍 根据用户名获取用户: {}", username);

    let user = sqlx::query_as::<_, User>("SELECT id, username, password, role, created_at FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(executor)
        .await?;

    Ok(user)
}

/// 写入演示数据时在同一个事务中调用
pub(crate) async fn insert_user<'e, E>(executor: E, user: UserCreate) -> DatabaseResult<User>
where
    E: PgExecutor<'e>,
{
    // 不要把密码哈希写进日志
    debug!("📝 创建用户: {}", user.username);

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password, role)
        VALUES ($1, $2, $3)
        RETURNING id, username, password, role, created_at
        "#,
    )
    .bind(&user.username)
    .bind(&user.password)
    .bind(&user.role)
    .fetch_one(executor)
    .await?;

    debug!("✅ 用户创建成功: {}", user.id);
    Ok(user)
}
