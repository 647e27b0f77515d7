//! # Web Config
//!
//! Delivers the rendered web config file to the monitored process. The
//! document is stored by the caller in a Secret under
//! [`WEB_CONFIG_FILE_KEY`]; this module produces the command line flag and the
//! volume/mount pair exposing that Secret entry.

use k8s_openapi::api::core::v1::{SecretVolumeSource, Volume, VolumeMount};

use crate::constants::{WEB_CONFIG_FILE_FLAG, WEB_CONFIG_FILE_KEY, WEB_CONFIG_VOLUME_NAME};
use crate::error::Result;
use crate::web_config::credentials::TlsCredentials;
use crate::web_config::render::{render, ResolvedPaths, TlsServerSpec};

/// Web configuration for one monitored process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    secret_name: String,
}

impl WebConfig {
    pub fn new(secret_name: impl Into<String>) -> Self {
        Self {
            secret_name: secret_name.into(),
        }
    }

    #[must_use]
    pub fn secret_name(&self) -> &str {
        &self.secret_name
    }

    /// Render the web config file contents for `tls`
    ///
    /// Credentials are resolved under `assets_path_prefix`; with no TLS spec
    /// the document is an empty mapping.
    ///
    /// # Errors
    ///
    /// [`crate::WebConfigError::MissingKeySelector`] for a spec without key,
    /// [`crate::WebConfigError::Serialize`] if emission fails.
    pub fn generate_config_file_contents(
        &self,
        assets_path_prefix: &str,
        tls: Option<&TlsServerSpec>,
    ) -> Result<Vec<u8>> {
        match tls {
            None => render(None, &ResolvedPaths::default()),
            Some(spec) => {
                let credentials = TlsCredentials::from_spec(assets_path_prefix, spec)?;
                render(Some(spec), &credentials.resolved_paths())
            }
        }
    }

    /// Flag, volume and mount exposing the web config file at `destination_path`
    #[must_use]
    pub fn mount(&self, destination_path: &str) -> (String, Volume, VolumeMount) {
        (
            Self::make_arg(destination_path),
            self.make_volume(),
            Self::make_volume_mount(destination_path),
        )
    }

    #[must_use]
    pub fn make_arg(file_path: &str) -> String {
        format!("{WEB_CONFIG_FILE_FLAG}={file_path}")
    }

    #[must_use]
    pub fn make_volume(&self) -> Volume {
        Volume {
            name: WEB_CONFIG_VOLUME_NAME.to_string(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(self.secret_name.clone()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn make_volume_mount(file_path: &str) -> VolumeMount {
        VolumeMount {
            name: WEB_CONFIG_VOLUME_NAME.to_string(),
            sub_path: Some(WEB_CONFIG_FILE_KEY.to_string()),
            read_only: Some(true),
            mount_path: file_path.to_string(),
            ..Default::default()
        }
    }
}
