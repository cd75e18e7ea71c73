//! 自定义提取器

use crate::models::err::AppError;
use axum::extract::FromRequest;

/// 与 [`axum::Json`] 相同，但解析失败时统一返回 [`AppError`]（400 + `{"error": ...}`）
///
/// axum 默认会根据失败原因返回 400 / 415 / 422 和纯文本错误。
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
