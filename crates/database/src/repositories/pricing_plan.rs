//! 价格方案仓库

use crate::models::pricing_plan::{PricingPlan, PricingPlanCreate, PricingPlanUpdate};
use crate::repositories::traits::PricingPlanRepositoryTrait;
use crate::DatabaseResult;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PricingPlanRepository {
    pool: PgPool,
}

impl PricingPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PricingPlanRepositoryTrait for PricingPlanRepository {
    async fn get_all_pricing_plans(&self, active_only: bool) -> DatabaseResult<Vec<PricingPlan>> {
        debug!("🔍 获取价格方案, active_only: {}", active_only);

        let plans = sqlx::query_as::<_, PricingPlan>(
            r#"
            SELECT id, name, description, price, currency, duration, features, popular, "order",
                   active, created_at, updated_at
            FROM pricing_plans
            WHERE (NOT $1 OR active = true)
            ORDER BY "order" DESC
            "#,
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    async fn get_pricing_plan_by_id(&self, id: &str) -> DatabaseResult<Option<PricingPlan>> {
        debug!("🔍 根据 ID 获取价格方案: {}", id);

        let plan = sqlx::query_as::<_, PricingPlan>(
            r#"
            SELECT id, name, description, price, currency, duration, features, popular, "order",
                   active, created_at, updated_at
            FROM pricing_plans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn create_pricing_plan(&self, plan: PricingPlanCreate) -> DatabaseResult<PricingPlan> {
        insert_pricing_plan(&self.pool, plan).await
    }

    async fn update_pricing_plan(&self, id: &str, update: PricingPlanUpdate) -> DatabaseResult<Option<PricingPlan>> {
        debug!("🔄 更新价格方案 {} 信息: {:#?}", id, update);

        let plan = sqlx::query_as::<_, PricingPlan>(
            r#"
            UPDATE pricing_plans
            SET name = coalesce($2, name),
                description = coalesce($3, description),
                price = coalesce($4, price),
                currency = coalesce($5, currency),
                duration = coalesce($6, duration),
                features = coalesce($7, features),
                popular = coalesce($8, popular),
                "order" = coalesce($9, "order"),
                active = coalesce($10, active),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, price, currency, duration, features, popular, "order",
                      active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.price)
        .bind(update.currency)
        .bind(update.duration)
        .bind(update.features)
        .bind(update.popular)
        .bind(update.order)
        .bind(update.active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    async fn delete_pricing_plan(&self, id: &str) -> DatabaseResult<bool> {
        debug!("🗑️ 删除价格方案: {}", id);

        let result = sqlx::query("DELETE FROM pricing_plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

pub(crate) async fn insert_pricing_plan<'e, E>(executor: E, plan: PricingPlanCreate) -> DatabaseResult<PricingPlan>
where
    E: PgExecutor<'e>,
{
    debug!("📝 创建价格方案: {:#?}", plan);

    let plan = sqlx::query_as::<_, PricingPlan>(
        r#"
        INSERT INTO pricing_plans (name, description, price, currency, duration, features, popular,
                                   "order", active)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, name, description, price, currency, duration, features, popular, "order",
                  active, created_at, updated_at
        "#,
    )
    .bind(&plan.name)
    .bind(&plan.description)
    .bind(plan.price)
    .bind(&plan.currency)
    .bind(&plan.duration)
    .bind(&plan.features)
    .bind(plan.popular)
    .bind(plan.order)
    .bind(plan.active)
    .fetch_one(executor)
    .await?;

    debug!("✅ 价格方案创建成功: {}", plan.id);
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    fn sample(name: &str, order: i32, active: bool) -> PricingPlanCreate {
        PricingPlanCreate {
            name: name.into(),
            description: "Plan".into(),
            price: 5_000_000,
            currency: "IDR".into(),
            duration: "one-time".into(),
            features: vec!["Responsive Design".into()],
            popular: false,
            order,
            active,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn active_only_filter_and_ordering() {
        let repo = PricingPlanRepository::new(test_pool().await);
        let active = repo.create_pricing_plan(sample("active-plan", 10, true)).await.unwrap();
        let retired = repo.create_pricing_plan(sample("retired-plan", 20, false)).await.unwrap();

        let active_plans = repo.get_all_pricing_plans(true).await.unwrap();
        assert!(active_plans.iter().all(|p| p.active));
        assert!(!active_plans.iter().any(|p| p.id == retired.id));

        let all_plans = repo.get_all_pricing_plans(false).await.unwrap();
        assert!(all_plans.iter().any(|p| p.id == retired.id));
        assert!(all_plans.windows(2).all(|w| w[0].order >= w[1].order));

        repo.delete_pricing_plan(&active.id).await.unwrap();
        repo.delete_pricing_plan(&retired.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn price_update_keeps_features() {
        let repo = PricingPlanRepository::new(test_pool().await);
        let created = repo.create_pricing_plan(sample("update-plan", 1, true)).await.unwrap();

        let update = PricingPlanUpdate {
            price: Some(7_500_000),
            ..Default::default()
        };
        let updated = repo.update_pricing_plan(&created.id, update).await.unwrap().unwrap();
        assert_eq!(updated.price, 7_500_000);
        assert_eq!(updated.features, created.features);
        assert_eq!(updated.currency, "IDR");

        assert!(repo.delete_pricing_plan(&created.id).await.unwrap());
        assert!(!repo.delete_pricing_plan(&created.id).await.unwrap());
    }
}
