//! Web层的请求数据结构
//!
//! 请求体先反序列化为这里的结构体并校验，再转换为 `database` 中的模型

pub mod blog;
pub mod company;
pub mod err;
pub mod inquiries;
pub mod pricing;
pub mod projects;

use serde::{Deserialize, Deserializer};

/// 可空字段的反序列化
///
/// 配合 `#[serde(default)]` 使用：字段未传入时为 `None`，传入null时为 `Some(None)`。
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
