use database::DEFAULT_CURRENCY;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// 价格方案列表查询参数
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PricingQuery {
    /// 等于 `true` 时只返回启用的方案
    pub active: Option<String>,
}

impl PricingQuery {
    pub fn active_only(&self) -> bool {
        self.active.as_deref() == Some("true")
    }
}

/// 创建价格方案的请求体
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlanCreate {
    #[schema(example = "Starter")]
    #[validate(length(min = 1))]
    pub name: String,

    pub description: String,

    /// 整数金额
    #[schema(example = 5000000)]
    #[validate(range(min = 0))]
    pub price: i32,

    #[serde(default = "default_currency")]
    #[schema(example = "IDR")]
    pub currency: String,

    #[schema(example = "one-time")]
    #[validate(length(min = 1))]
    pub duration: String,

    pub features: Vec<String>,

    #[serde(default)]
    pub popular: bool,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_active() -> bool {
    true
}

/// 更新价格方案的请求体
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlanUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    pub currency: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
    pub order: Option<i32>,
    pub active: Option<bool>,
}

impl From<PricingPlanCreate> for database::PricingPlanCreate {
    fn from(plan: PricingPlanCreate) -> Self {
        Self {
            name: plan.name,
            description: plan.description,
            price: plan.price,
            currency: plan.currency,
            duration: plan.duration,
            features: plan.features,
            popular: plan.popular,
            order: plan.order,
            active: plan.active,
        }
    }
}

impl From<PricingPlanUpdate> for database::PricingPlanUpdate {
    fn from(update: PricingPlanUpdate) -> Self {
        Self {
            name: update.name,
            description: update.description,
            price: update.price,
            currency: update.currency,
            duration: update.duration,
            features: update.features,
            popular: update.popular,
            order: update.order,
            active: update.active,
        }
    }
}
