//! 日志初始化
//!
//! 使用 `RUST_LOG` 环境变量控制日志级别，未设置时默认为 `info`。

use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅者，程序启动时调用一次即可
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 重复初始化（例如测试中）时忽略错误
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
