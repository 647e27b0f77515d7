//! # TLS Credentials
//!
//! The key, certificate and client CA of one TLS server, together with the
//! directory they are mounted under.

use k8s_openapi::api::core::v1::{Volume, VolumeMount};

use crate::error::{Result, WebConfigError};
use crate::web_config::assets::resolve_asset_path;
use crate::web_config::mounts::{into_volumes_and_mounts, plan_all, MountDeclaration};
use crate::web_config::render::{ResolvedPaths, TlsServerSpec};
use crate::web_config::selector::CredentialSelector;

/// Credentials used for web TLS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsCredentials {
    /// Directory the credentials are mounted under
    mount_path: String,
    key: CredentialSelector,
    cert: CredentialSelector,
    client_ca: CredentialSelector,
}

impl TlsCredentials {
    /// # Errors
    ///
    /// [`WebConfigError::MissingKeySelector`] if `key` is unset.
    pub fn new(
        mount_path: impl Into<String>,
        key: CredentialSelector,
        cert: CredentialSelector,
        client_ca: CredentialSelector,
    ) -> Result<Self> {
        if !key.is_set() {
            return Err(WebConfigError::MissingKeySelector);
        }
        Ok(Self {
            mount_path: mount_path.into(),
            key,
            cert,
            client_ca,
        })
    }

    /// # Errors
    ///
    /// [`WebConfigError::MissingKeySelector`] if the spec has no key.
    pub fn from_spec(mount_path: impl Into<String>, spec: &TlsServerSpec) -> Result<Self> {
        Self::new(
            mount_path,
            spec.key.clone(),
            spec.cert.clone(),
            spec.client_ca.clone(),
        )
    }

    #[must_use]
    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }

    /// Path of the private key inside the container
    #[must_use]
    pub fn key_mount_path(&self) -> String {
        resolve_asset_path(&self.key, &self.mount_path)
    }

    /// Path of the certificate, empty if none is configured
    #[must_use]
    pub fn cert_mount_path(&self) -> String {
        resolve_asset_path(&self.cert, &self.mount_path)
    }

    /// Path of the client CA, empty if none is configured
    #[must_use]
    pub fn ca_mount_path(&self) -> String {
        resolve_asset_path(&self.client_ca, &self.mount_path)
    }

    #[must_use]
    pub fn resolved_paths(&self) -> ResolvedPaths {
        ResolvedPaths {
            key: self.key_mount_path(),
            cert: self.cert_mount_path(),
            client_ca: self.ca_mount_path(),
        }
    }

    /// Volume/mount pairs in key, cert, client CA order
    ///
    /// # Errors
    ///
    /// Only [`WebConfigError::MissingKeySelector`], which `new` already rules out.
    pub fn mount_declarations(&self) -> Result<Vec<MountDeclaration>> {
        plan_all(&self.key, &self.cert, &self.client_ca, &self.resolved_paths())
    }

    /// Volumes and volume mounts referencing the TLS credentials
    ///
    /// # Errors
    ///
    /// See [`TlsCredentials::mount_declarations`].
    pub fn mount(&self) -> Result<(Vec<Volume>, Vec<VolumeMount>)> {
        Ok(into_volumes_and_mounts(self.mount_declarations()?))
    }
}
