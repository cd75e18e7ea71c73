//! 价格方案仓库 trait 定义

use crate::models::pricing_plan::{PricingPlan, PricingPlanCreate, PricingPlanUpdate};
use crate::DatabaseResult;

/// 价格方案仓库trait定义
#[async_trait::async_trait]
pub trait PricingPlanRepositoryTrait: Send + Sync + 'static {
    /// 获取价格方案列表，按 `order` 倒序
    ///
    /// # 参数
    /// - `active_only`: 为 `true` 时只返回上架中的方案
    async fn get_all_pricing_plans(&self, active_only: bool) -> DatabaseResult<Vec<PricingPlan>>;

    async fn get_pricing_plan_by_id(&self, id: &str) -> DatabaseResult<Option<PricingPlan>>;

    async fn create_pricing_plan(&self, plan: PricingPlanCreate) -> DatabaseResult<PricingPlan>;

    async fn update_pricing_plan(&self, id: &str, update: PricingPlanUpdate) -> DatabaseResult<Option<PricingPlan>>;

    async fn delete_pricing_plan(&self, id: &str) -> DatabaseResult<bool>;
}
