//! CLI module for site-monitor
//!
//! Provides command-line interface for the monitor server and one-shot checks.

/// check サブコマンド
pub mod check;
/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// Site monitor - Periodic reachability checks for registered web sites
#[derive(Parser, Debug)]
#[command(name = "site-monitor")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SITE_MONITOR_HOST       Bind address (default: 127.0.0.1, legacy: HOST)
    SITE_MONITOR_PORT       Listen port (default: 8080, legacy: PORT)
    SITE_MONITOR_LOG_LEVEL  Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the monitor server (default)
    Serve(serve::ServeArgs),
    /// Check the given sites once and print their status
    Check(check::CheckArgs),
}
