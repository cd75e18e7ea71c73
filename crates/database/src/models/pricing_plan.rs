//! 价格方案数据库模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 默认币种
pub const DEFAULT_CURRENCY: &str = "IDR";

/// 价格方案
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub description: String,
    /// 整数金额，不区分最小货币单位
    pub price: i32,
    pub currency: String,
    pub duration: String,
    pub features: Vec<String>,
    pub popular: bool,
    pub order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 价格方案创建参数
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlanCreate {
    pub name: String,
    pub description: String,
    pub price: i32,
    #[serde(default = "default_currency")]
    pub currency: String,
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

/// 价格方案更新参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingPlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i32>,
    pub currency: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub popular: Option<bool>,
    pub order: Option<i32>,
    pub active: Option<bool>,
}
