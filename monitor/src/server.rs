//! axumサーバー起動・シャットダウンハンドリング

use crate::shutdown::ShutdownController;
use crate::AppState;
use site_monitor_common::config::MonitorConfig;
use site_monitor_common::error::MonitorResult;
use tracing::{error, info};

/// axumサーバーを起動し、シャットダウンシグナルを待機する
///
/// シグナル受信時は `ShutdownController` に停止を要求し、チェッカーループも止める。
pub async fn run(state: AppState, config: &MonitorConfig) -> MonitorResult<()> {
    config.validate()?;
    let shutdown = state.shutdown.clone();
    let bind_addr = config.bind_addr();

    let app = crate::api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Site monitor listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal(shutdown: ShutdownController) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            info!("Shutdown requested, shutting down...");
        }
    }

    shutdown.request_shutdown();
}
