//! 项目仓库
//!
//! 负责项目相关的数据库操作

use crate::models::project::{Project, ProjectCreate, ProjectUpdate};
use crate::repositories::traits::ProjectRepositoryTrait;
use crate::DatabaseResult;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

/// 项目仓库结构体
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// 创建新的项目仓库实例
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>> {
        debug!("🔍 获取全部项目");

        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, long_description, category, image_url, technologies,
                   live_url, github_url, featured, "order", created_at, updated_at
            FROM projects
            ORDER BY "order" DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("✅ 找到 {} 个项目", projects.len());
        Ok(projects)
    }

    async fn get_featured_projects(&self) -> DatabaseResult<Vec<Project>> {
        debug!("🔍 获取精选项目");

        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, long_description, category, image_url, technologies,
                   live_url, github_url, featured, "order", created_at, updated_at
            FROM projects
            WHERE featured = true
            ORDER BY "order" DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &str) -> DatabaseResult<Option<Project>> {
        debug!("🔍 根据 ID 获取项目: {}", id);

        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, long_description, category, image_url, technologies,
                   live_url, github_url, featured, "order", created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    /// 创建新项目
    ///
    /// ID、`created_at` 和 `updated_at` 由数据库生成
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<Project> {
        insert_project(&self.pool, project).await
    }

    /// 更新项目信息
    ///
    /// ## SQL
    ///
    /// 必填字段都是[`Option`]，因此我们使用了`postgresql`中的`coalesce`函数，如果用户输入的值
    /// 为None，那么会被转换为数据库的null，最终被转换为之前值。
    ///
    /// 可空字段无法用`coalesce`区分“未传入”和“置为null”，额外绑定一个是否修改的标记，
    /// 通过`CASE WHEN`决定是否写入。
    async fn update_project(&self, id: &str, update: ProjectUpdate) -> DatabaseResult<Option<Project>> {
        debug!("🔄 更新项目 {} 信息: {:#?}", id, update);

        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET title = coalesce($2, title),
                description = coalesce($3, description),
                long_description = CASE WHEN $4 THEN $5 ELSE long_description END,
                category = coalesce($6, category),
                image_url = coalesce($7, image_url),
                technologies = coalesce($8, technologies),
                live_url = CASE WHEN $9 THEN $10 ELSE live_url END,
                github_url = CASE WHEN $11 THEN $12 ELSE github_url END,
                featured = coalesce($13, featured),
                "order" = coalesce($14, "order"),
                updated_at = now()
            WHERE id = $1
            RETURNING id, title, description, long_description, category, image_url, technologies,
                      live_url, github_url, featured, "order", created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.long_description.is_some())
        .bind(update.long_description.flatten())
        .bind(update.category)
        .bind(update.image_url)
        .bind(update.technologies)
        .bind(update.live_url.is_some())
        .bind(update.live_url.flatten())
        .bind(update.github_url.is_some())
        .bind(update.github_url.flatten())
        .bind(update.featured)
        .bind(update.order)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete_project(&self, id: &str) -> DatabaseResult<bool> {
        debug!("🗑️ 删除项目: {}", id);

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// 写入一条记录，可以在连接池或事务上执行
pub(crate) async fn insert_project<'e, E>(executor: E, project: ProjectCreate) -> DatabaseResult<Project>
where
    E: PgExecutor<'e>,
{
    debug!("📝 创建项目: {:#?}", project);

    let project = sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (title, description, long_description, category, image_url, technologies,
                              live_url, github_url, featured, "order")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, title, description, long_description, category, image_url, technologies,
                  live_url, github_url, featured, "order", created_at, updated_at
        "#,
    )
    .bind(&project.title)
    .bind(&project.description)
    .bind(&project.long_description)
    .bind(&project.category)
    .bind(&project.image_url)
    .bind(&project.technologies)
    .bind(&project.live_url)
    .bind(&project.github_url)
    .bind(project.featured)
    .bind(project.order)
    .fetch_one(executor)
    .await?;

    debug!("✅ 项目创建成功: {}", project.id);
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    fn sample(category: &str, order: i32, featured: bool) -> ProjectCreate {
        ProjectCreate {
            title: format!("Project {order}"),
            description: "Landing page".into(),
            long_description: None,
            category: category.into(),
            image_url: "https://img.test/p.png".into(),
            technologies: vec!["Rust".into(), "Axum".into()],
            live_url: None,
            github_url: Some("https://github.com/studio/p".into()),
            featured,
            order,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_returns_same_fields() {
        let repo = ProjectRepository::new(test_pool().await);

        let created = repo.create_project(sample("create-get", 7, false)).await.unwrap();
        let fetched = repo.get_project_by_id(&created.id).await.unwrap().unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.technologies, vec!["Rust".to_string(), "Axum".to_string()]);
        assert_eq!(fetched.order, 7);

        repo.delete_project(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_order_descending() {
        let repo = ProjectRepository::new(test_pool().await);
        let category = "ordering-check";

        let mut ids = Vec::new();
        for order in [3, 1, 2] {
            ids.push(repo.create_project(sample(category, order, false)).await.unwrap().id);
        }

        let orders: Vec<i32> = repo
            .get_all_projects()
            .await
            .unwrap()
            .into_iter()
            .filter(|p| p.category == category)
            .map(|p| p.order)
            .collect();
        assert_eq!(orders, vec![3, 2, 1]);

        for id in ids {
            repo.delete_project(&id).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn featured_only_contains_featured() {
        let repo = ProjectRepository::new(test_pool().await);
        let featured = repo.create_project(sample("featured-check", 1, true)).await.unwrap();
        let regular = repo.create_project(sample("featured-check", 2, false)).await.unwrap();

        let listed = repo.get_featured_projects().await.unwrap();
        assert!(listed.iter().all(|p| p.featured));
        assert!(listed.iter().any(|p| p.id == featured.id));
        assert!(!listed.iter().any(|p| p.id == regular.id));

        repo.delete_project(&featured.id).await.unwrap();
        repo.delete_project(&regular.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_only_touches_given_fields() {
        let repo = ProjectRepository::new(test_pool().await);
        let created = repo.create_project(sample("partial-update", 4, false)).await.unwrap();

        let update = ProjectUpdate {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        let updated = repo.update_project(&created.id, update).await.unwrap().unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.technologies, created.technologies);
        assert_eq!(updated.github_url, created.github_url);
        assert_eq!(updated.order, created.order);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);

        repo.delete_project(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn explicit_null_clears_optional_columns() {
        let repo = ProjectRepository::new(test_pool().await);
        let mut project = sample("clear-nullable", 2, false);
        project.live_url = Some("https://live.test".into());
        project.long_description = Some("Long story".into());
        let created = repo.create_project(project).await.unwrap();

        let update = ProjectUpdate {
            live_url: Some(None),
            ..Default::default()
        };
        let updated = repo.update_project(&created.id, update).await.unwrap().unwrap();

        assert_eq!(updated.live_url, None);
        // 未传入的可空字段保持原值
        assert_eq!(updated.long_description.as_deref(), Some("Long story"));
        assert_eq!(updated.github_url, created.github_url);

        let update = ProjectUpdate {
            github_url: Some(Some("https://github.com/studio/renamed".into())),
            ..Default::default()
        };
        let updated = repo.update_project(&created.id, update).await.unwrap().unwrap();
        assert_eq!(updated.github_url.as_deref(), Some("https://github.com/studio/renamed"));
        assert_eq!(updated.live_url, None);

        repo.delete_project(&created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_and_delete_unknown_id() {
        let repo = ProjectRepository::new(test_pool().await);

        let updated = repo.update_project("does-not-exist", ProjectUpdate::default()).await.unwrap();
        assert!(updated.is_none());
        assert!(!repo.delete_project("does-not-exist").await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_row() {
        let repo = ProjectRepository::new(test_pool().await);
        let created = repo.create_project(sample("delete-check", 1, false)).await.unwrap();

        assert!(repo.delete_project(&created.id).await.unwrap());
        assert!(repo.get_project_by_id(&created.id).await.unwrap().is_none());
        assert!(!repo.delete_project(&created.id).await.unwrap());
    }
}
