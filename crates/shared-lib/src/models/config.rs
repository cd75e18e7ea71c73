use color_eyre::eyre::eyre;
use color_eyre::{Result, Section};
use std::sync::Arc;

/// 默认监听地址
const DEFAULT_HOST: &str = "0.0.0.0";

/// 默认监听端口
const DEFAULT_PORT: u16 = 5000;

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 连接池最大连接数
    /// 可通过环境变量 `DATABASE_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,

    /// 连接池启动时预留的连接数
    /// 可通过环境变量 `DATABASE_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,

    /// HTTP服务监听的主机地址，环境变量 `HOST`
    pub host: String,

    /// HTTP服务监听的端口，环境变量 `PORT`
    pub port: u16,

    /// 允许跨域访问的前端地址，环境变量 `CORS_ALLOW_ORIGIN`
    ///
    /// 未设置时允许所有来源
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 根据传入的查找函数构建配置
    ///
    /// 只有 `DATABASE_URL` 是必填项，其余配置在缺失或无法解析时使用默认值。
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 读取数据库地址信息（仅支持postgresql）
        let db_url = lookup("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| eyre!("Can not load DATABASE_URL in environment"))
            .suggestion("设置 DATABASE_URL 环境变量，或者在 .env 文件中配置")?;

        let parse_or = |key: &str, default: u32| lookup(key).map_or(default, |s| s.parse().unwrap_or(default));

        Ok(AppConfig {
            database: DatabaseConfig {
                postgresql_conn_str: db_url,
                max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 10),
                min_connections: parse_or("DATABASE_MIN_CONNECTIONS", 1),
            },
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT").map_or(DEFAULT_PORT, |s| s.parse().unwrap_or(DEFAULT_PORT)),
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN").filter(|s| !s.is_empty()),
        })
    }

    /// HTTP服务的监听地址，格式为 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
