//! 客户咨询仓库 trait 定义

use crate::models::inquiry::{Inquiry, InquiryCreate};
use crate::DatabaseResult;

/// 客户咨询仓库trait定义
///
/// 咨询记录创建后只允许修改 `status`，没有通用的更新接口
#[async_trait::async_trait]
pub trait InquiryRepositoryTrait: Send + Sync + 'static {
    /// 获取全部咨询，按创建时间倒序
    async fn get_all_inquiries(&self) -> DatabaseResult<Vec<Inquiry>>;

    async fn get_inquiry_by_id(&self, id: &str) -> DatabaseResult<Option<Inquiry>>;

    /// 创建咨询，状态总是初始化为 `new`
    async fn create_inquiry(&self, inquiry: InquiryCreate) -> DatabaseResult<Inquiry>;

    /// 只更新咨询状态
    ///
    /// # 返回值
    /// 咨询不存在时返回 `None`
    async fn update_inquiry_status(&self, id: &str, status: &str) -> DatabaseResult<Option<Inquiry>>;

    async fn delete_inquiry(&self, id: &str) -> DatabaseResult<bool>;
}
