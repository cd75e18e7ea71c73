//! 项目仓库 trait 定义
//!
//! 定义项目数据库操作的抽象接口

use crate::models::project::{Project, ProjectCreate, ProjectUpdate};
use crate::DatabaseResult;

/// 项目仓库trait定义
///
/// 定义了项目相关的数据库操作接口，支持：
/// - 项目列表（按 `order` 倒序）
/// - 精选项目列表
/// - 项目创建
/// - 项目查询
/// - 项目更新
/// - 项目删除
#[async_trait::async_trait]
pub trait ProjectRepositoryTrait: Send + Sync + 'static {
    /// 获取全部项目，按 `order` 倒序排列
    async fn get_all_projects(&self) -> DatabaseResult<Vec<Project>>;

    /// 获取 `featured = true` 的项目，按 `order` 倒序排列
    async fn get_featured_projects(&self) -> DatabaseResult<Vec<Project>>;

    /// 根据 ID 获取项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    ///
    /// # 返回值
    /// 项目不存在时返回 `None`
    async fn get_project_by_id(&self, id: &str) -> DatabaseResult<Option<Project>>;

    /// 创建新项目
    ///
    /// # 参数
    /// - `project`: 项目创建信息
    ///
    /// # 返回值
    /// 返回包含 ID 和时间戳的完整项目信息
    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<Project>;

    /// 更新项目信息
    ///
    /// # 参数
    /// - `id`: 项目 ID
    /// - `update`: 更新信息，为 `None` 的字段保持不变
    ///
    /// # 返回值
    /// 项目不存在时返回 `None`，不会创建新项目
    async fn update_project(&self, id: &str, update: ProjectUpdate) -> DatabaseResult<Option<Project>>;

    /// 删除项目
    ///
    /// # 返回值
    /// 是否真的删除了一条记录
    async fn delete_project(&self, id: &str) -> DatabaseResult<bool>;
}
