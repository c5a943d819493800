//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names with warning logs.

use site_monitor_common::config::MonitorConfig;

/// Get an environment variable with fallback to a legacy name
///
/// If the new variable name is set, returns its value.
/// If only the legacy variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use site_monitor::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("SITE_MONITOR_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 環境変数からサーバー設定を読み込む
///
/// `SITE_MONITOR_HOST`（旧: `HOST`）、`SITE_MONITOR_PORT`（旧: `PORT`）。
/// 未設定の場合は `MonitorConfig::default()` の値を使う。
pub fn monitor_config_from_env() -> MonitorConfig {
    let defaults = MonitorConfig::default();
    MonitorConfig {
        host: get_env_with_fallback_or("SITE_MONITOR_HOST", "HOST", &defaults.host),
        port: get_env_with_fallback_parse("SITE_MONITOR_PORT", "PORT", defaults.port),
    }
}
