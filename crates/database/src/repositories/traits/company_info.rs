//! 公司信息仓库 trait 定义

use crate::models::company_info::{CompanyInfo, CompanyInfoUpdate};
use crate::DatabaseResult;

/// 公司信息仓库trait定义
///
/// 公司信息是单行记录，没有单独的创建和删除接口
#[async_trait::async_trait]
pub trait CompanyInfoRepositoryTrait: Send + Sync + 'static {
    /// 获取公司信息，尚未初始化时返回 `None`
    async fn get_company_info(&self) -> DatabaseResult<Option<CompanyInfo>>;

    /// 更新或插入公司信息
    ///
    /// - 已存在：合并传入的字段并刷新 `updated_at`
    /// - 不存在：传入的字段作为初始数据插入，此时必须包含全部必填字段，
    ///   否则返回 [`crate::DatabaseError::ValidationError`]
    ///
    /// 并发的首次初始化不会产生多行数据
    async fn update_company_info(&self, update: CompanyInfoUpdate) -> DatabaseResult<CompanyInfo>;
}
