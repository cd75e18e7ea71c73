use color_eyre::Result;
use database::initialize_database;
use shared_lib::{init_tracing, AppConfig};
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = AppConfig::load()?;

    // 连接数据库并执行迁移，连接池由这里创建后传递给Web服务
    let pool = initialize_database(config.clone()).await?;

    // 关闭信号通过watch通道广播给各个服务
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        shutdown_signal().await;
        info!("📴 收到关闭信号");
        if shutdown_tx.send(true).is_err() {
            error!("❌ 发送关闭信号失败，服务可能已经退出");
        }
    });

    web_service::start_web_service(config, pool.clone(), shutdown_rx).await?;

    pool.close().await;
    info!("👋 服务已退出");

    Ok(())
}

/// 等待 Ctrl+C 或者 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("❌ 监听 Ctrl+C 失败: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("❌ 监听 SIGTERM 失败: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
