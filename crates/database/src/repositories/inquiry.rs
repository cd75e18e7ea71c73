//! 客户咨询仓库

use crate::models::inquiry::{Inquiry, InquiryCreate};
use crate::repositories::traits::InquiryRepositoryTrait;
use crate::DatabaseResult;
use sqlx::PgPool;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct InquiryRepository {
    pool: PgPool,
}

impl InquiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl InquiryRepositoryTrait for InquiryRepository {
    async fn get_all_inquiries(&self) -> DatabaseResult<Vec<Inquiry>> {
        debug!("🔍 获取全部咨询");

        let inquiries = sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, name, email, phone, company, service, budget, message, status, created_at
            FROM inquiries
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(inquiries)
    }

    async fn get_inquiry_by_id(&self, id: &str) -> DatabaseResult<Option<Inquiry>> {
        debug!("🔍 根据 ID 获取咨询: {}", id);

        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id, name, email, phone, company, service, budget, message, status, created_at
            FROM inquiries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inquiry)
    }

    async fn create_inquiry(&self, inquiry: InquiryCreate) -> DatabaseResult<Inquiry> {
        debug!("📝 创建咨询: {} <{}>", inquiry.name, inquiry.email);

        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (name, email, phone, company, service, budget, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, company, service, budget, message, status, created_at
            "#,
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.company)
        .bind(&inquiry.service)
        .bind(&inquiry.budget)
        .bind(&inquiry.message)
        .fetch_one(&self.pool)
        .await?;

        debug!("✅ 咨询创建成功: {}", inquiry.id);
        Ok(inquiry)
    }

    async fn update_inquiry_status(&self, id: &str, status: &str) -> DatabaseResult<Option<Inquiry>> {
        debug!("🔄 更新咨询 {} 状态为 {}", id, status);

        let inquiry = sqlx::query_as::<_, Inquiry>(
            r#"
            UPDATE inquiries
            SET status = $2
            WHERE id = $1
            RETURNING id, name, email, phone, company, service, budget, message, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inquiry)
    }

    async fn delete_inquiry(&self, id: &str) -> DatabaseResult<bool> {
        debug!("🗑️ 删除咨询: {}", id);

        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;
    use crate::DEFAULT_INQUIRY_STATUS;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn inquiry_lifecycle() {
        let repo = InquiryRepository::new(test_pool().await);

        let created = repo
            .create_inquiry(InquiryCreate {
                name: "A".into(),
                email: "a@x.com".into(),
                phone: None,
                company: None,
                service: "web".into(),
                budget: None,
                message: "hi".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.status, DEFAULT_INQUIRY_STATUS);

        let contacted = repo.update_inquiry_status(&created.id, "contacted").await.unwrap().unwrap();
        assert_eq!(contacted.status, "contacted");
        assert_eq!(contacted.message, "hi");
        assert_eq!(contacted.created_at, created.created_at);

        assert!(repo.delete_inquiry(&created.id).await.unwrap());
        assert!(repo.get_inquiry_by_id(&created.id).await.unwrap().is_none());
        assert!(repo.update_inquiry_status(&created.id, "closed").await.unwrap().is_none());
    }
}
