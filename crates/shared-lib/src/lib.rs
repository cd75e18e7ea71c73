//! 🔧 共享库模块
//!
//! 这个模块包含了在多个可执行程序之间共享的通用代码，包括：
//! - 程序配置加载
//! - 日志初始化

pub mod models;
pub mod telemetry;

// 重新导出常用类型
pub use models::AppConfig;
pub use telemetry::init_tracing;
