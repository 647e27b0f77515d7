//! # Observability
//!
//! Tracing subscriber setup for the generator binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary so that embedding operators keep their own.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::GeneratorConfig;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so rendered
/// documents on stdout stay machine-readable.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &GeneratorConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format.eq_ignore_ascii_case("json") {
        builder.json().try_init().map_err(|e| anyhow::anyhow!(e))?;
    } else {
        builder
            .with_ansi(config.log_enable_color)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}

/// Filter directives applying `log_level` to this crate and its binary
fn default_directives(log_level: &str) -> String {
    let level = log_level.to_lowercase();
    format!("web_tls_config={level},web_config_gen={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives("DEBUG"),
            "web_tls_config=debug,web_config_gen=debug"
        );
    }

    #[test]
    fn test_init_tracing_reports_existing_subscriber() {
        let config = GeneratorConfig::default();
        // The first call may or may not win the global slot; the second never does.
        let _ = init_tracing(&config);
        let err = init_tracing(&config).expect_err("second init should fail");
        assert!(!err.to_string().is_empty());
    }
}
