//! # Web Config Generator
//!
//! Command-line front end for the web TLS config library.
//!
//! ## Usage
//!
//! ```bash
//! # Render the web config document for a TLS spec
//! web-config-gen render --tls-config tls.yaml
//!
//! # Render the document with TLS disabled
//! web-config-gen render
//!
//! # Print the CLI flag, volumes and volume mounts to add to the pod spec
//! web-config-gen mounts --tls-config tls.yaml
//!
//! # Print the JSON schema of the TLS spec
//! web-config-gen schema
//! ```
//!
//! Defaults come from the environment (`WEB_CONFIG_SECRET_NAME`,
//! `WEB_CONFIG_FILE_PATH`, `WEB_CONFIG_TLS_ASSETS_DIR`, `LOG_LEVEL`, ...) and
//! can be overridden with global flags.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use k8s_openapi::api::core::v1::{Volume, VolumeMount};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use web_tls_config::config::GeneratorConfig;
use web_tls_config::crd::WebTlsConfig;
use web_tls_config::observability::init_tracing;
use web_tls_config::web_config::{TlsCredentials, TlsServerSpec, WebConfig};

/// Prometheus web config generator
#[derive(Parser)]
#[command(name = "web-config-gen")]
#[command(
    about = "Generate Prometheus web config documents and TLS credential mounts",
    long_about = None,
    version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("BUILD_GIT_HASH"),
        ", built ",
        env!("BUILD_DATETIME"),
        ")"
    )
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Secret holding the rendered web config (overrides WEB_CONFIG_SECRET_NAME)
    #[arg(long, global = true)]
    secret_name: Option<String>,

    /// Directory TLS credentials are mounted under (overrides WEB_CONFIG_TLS_ASSETS_DIR)
    #[arg(long, global = true)]
    assets_dir: Option<String>,

    /// Web config file path inside the container (overrides WEB_CONFIG_FILE_PATH)
    #[arg(long, global = true)]
    config_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the web config document
    Render {
        /// YAML file containing the web TLS config; TLS is disabled if omitted
        #[arg(long, value_name = "FILE")]
        tls_config: Option<PathBuf>,
    },
    /// Print the CLI flag, volumes and volume mounts for the pod spec
    Mounts {
        /// YAML file containing the web TLS config
        #[arg(long, value_name = "FILE")]
        tls_config: Option<PathBuf>,
    },
    /// Print the JSON schema of the web TLS config
    Schema,
}

/// Everything a pod spec needs to consume the web config
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MountPlan {
    args: Vec<String>,
    volumes: Vec<Volume>,
    volume_mounts: Vec<VolumeMount>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GeneratorConfig::from_env();
    if let Some(secret_name) = cli.secret_name {
        config.web_config_secret_name = secret_name;
    }
    if let Some(assets_dir) = cli.assets_dir {
        config.tls_assets_dir = assets_dir;
    }
    if let Some(config_file) = cli.config_file {
        config.web_config_file_path = config_file;
    }

    init_tracing(&config).context("Failed to initialize tracing")?;
    debug!(
        "Build info: git_hash={}, datetime={}",
        env!("BUILD_GIT_HASH"),
        env!("BUILD_DATETIME")
    );

    match cli.command {
        Commands::Render { tls_config } => render_command(&config, tls_config.as_deref()),
        Commands::Mounts { tls_config } => mounts_command(&config, tls_config.as_deref()),
        Commands::Schema => schema_command(),
    }
}

fn load_server_spec(path: Option<&Path>) -> Result<Option<TlsServerSpec>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let tls = WebTlsConfig::from_path(path)?;
    let spec = tls
        .to_server_spec()
        .with_context(|| format!("Invalid web TLS config in {}", path.display()))?;
    Ok(Some(spec))
}

fn render_command(config: &GeneratorConfig, tls_config: Option<&Path>) -> Result<()> {
    let spec = load_server_spec(tls_config)?;
    let contents = render_document(config, spec.as_ref())?;

    std::io::stdout()
        .write_all(&contents)
        .context("Failed to write web config to stdout")?;
    info!(tls_enabled = spec.is_some(), "Rendered web config");
    Ok(())
}

/// Web config document for `spec`, `{}` when TLS is disabled
fn render_document(config: &GeneratorConfig, spec: Option<&TlsServerSpec>) -> Result<Vec<u8>> {
    WebConfig::new(&config.web_config_secret_name)
        .generate_config_file_contents(&config.tls_assets_dir, spec)
        .context("Failed to generate web config")
}

fn mounts_command(config: &GeneratorConfig, tls_config: Option<&Path>) -> Result<()> {
    let spec = load_server_spec(tls_config)?;
    let plan = mount_plan(config, spec.as_ref())?;

    let rendered = serde_yaml::to_string(&plan).context("Failed to serialize mount plan")?;
    print!("{rendered}");
    info!(
        volumes = plan.volumes.len(),
        volume_mounts = plan.volume_mounts.len(),
        "Planned web config mounts"
    );
    Ok(())
}

/// Web config flag, volume and mount, followed by the TLS credential mounts
fn mount_plan(config: &GeneratorConfig, spec: Option<&TlsServerSpec>) -> Result<MountPlan> {
    let (arg, volume, volume_mount) =
        WebConfig::new(&config.web_config_secret_name).mount(&config.web_config_file_path);
    let mut plan = MountPlan {
        args: vec![arg],
        volumes: vec![volume],
        volume_mounts: vec![volume_mount],
    };

    if let Some(spec) = spec {
        let (volumes, mounts) = TlsCredentials::from_spec(&config.tls_assets_dir, spec)
            .and_then(|credentials| credentials.mount())
            .context("Failed to plan TLS credential mounts")?;
        plan.volumes.extend(volumes);
        plan.volume_mounts.extend(mounts);
    }
    Ok(plan)
}

fn schema_command() -> Result<()> {
    let schema = schemars::schema_for!(WebTlsConfig);
    let rendered = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    println!("{rendered}");
    Ok(())
}
