//! Site Monitor Server Entry Point

use clap::Parser;
use site_monitor::cli::{check, serve::ServeArgs, Cli, Commands};
use site_monitor::probe::HttpProbe;
use site_monitor::{logging, server, AppState};
use site_monitor_common::config::MonitorConfig;
use site_monitor_common::error::MonitorResult;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Some(Commands::Check(args)) => match check::execute(&args).await {
            Ok(all_up) => {
                if !all_up {
                    std::process::exit(1);
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Some(Commands::Serve(args)) => run_server(args.to_config()).await,
        None => run_server(ServeArgs::default().to_config()).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: MonitorConfig) -> MonitorResult<()> {
    info!("Site Monitor v{}", env!("CARGO_PKG_VERSION"));

    let probe = Arc::new(HttpProbe::new()?);
    let state = AppState::new(probe);

    server::run(state, &config).await
}
