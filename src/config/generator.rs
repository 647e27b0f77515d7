//! # Generator Configuration
//!
//! Settings loaded from environment variables.

use crate::constants::{
    DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_TLS_ASSETS_DIR, DEFAULT_WEB_CONFIG_FILE_PATH,
    DEFAULT_WEB_CONFIG_SECRET_NAME,
};

/// Generator-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Name of the Secret the rendered web config is stored in
    pub web_config_secret_name: String,
    /// Location of the web config file inside the container
    pub web_config_file_path: String,
    /// Directory TLS credentials are mounted under
    pub tls_assets_dir: String,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            web_config_secret_name: DEFAULT_WEB_CONFIG_SECRET_NAME.to_string(),
            web_config_file_path: DEFAULT_WEB_CONFIG_FILE_PATH.to_string(),
            tls_assets_dir: DEFAULT_TLS_ASSETS_DIR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            log_enable_color: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            web_config_secret_name: var_or_default(
                &lookup,
                "WEB_CONFIG_SECRET_NAME",
                DEFAULT_WEB_CONFIG_SECRET_NAME,
            ),
            web_config_file_path: var_or_default(
                &lookup,
                "WEB_CONFIG_FILE_PATH",
                DEFAULT_WEB_CONFIG_FILE_PATH,
            ),
            tls_assets_dir: var_or_default(
                &lookup,
                "WEB_CONFIG_TLS_ASSETS_DIR",
                DEFAULT_TLS_ASSETS_DIR,
            ),
            log_level: var_or_default(&lookup, "LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: var_or_default(&lookup, "LOG_FORMAT", DEFAULT_LOG_FORMAT),
            log_enable_color: lookup("LOG_ENABLE_COLOR").is_some_and(|v| parse_bool(&v)),
        }
    }
}

/// Read a string setting or return default
fn var_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}
