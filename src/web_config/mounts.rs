//! # Credential Mounts
//!
//! Plans the `Volume`/`VolumeMount` pairs that expose TLS credentials at their
//! asset paths. The volume always references the whole Secret or ConfigMap;
//! the mount narrows it to a single key with `subPath` and pins that key to one
//! file.

use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, SecretVolumeSource, Volume, VolumeMount,
};
use tracing::debug;

use crate::constants::{
    CONFIGMAP_CERT_VOLUME_PREFIX, CONFIGMAP_CLIENT_CA_VOLUME_PREFIX, CONFIGMAP_KEY_VOLUME_PREFIX,
    SECRET_CERT_VOLUME_PREFIX, SECRET_CLIENT_CA_VOLUME_PREFIX, SECRET_KEY_VOLUME_PREFIX,
};
use crate::error::{Result, WebConfigError};
use crate::web_config::render::ResolvedPaths;
use crate::web_config::selector::{CredentialSelector, SourceKind};

/// Which TLS credential a selector provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialRole {
    Key,
    Cert,
    ClientCa,
}

impl CredentialRole {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialRole::Key => "key",
            CredentialRole::Cert => "cert",
            CredentialRole::ClientCa => "client-ca",
        }
    }

    /// Volume name prefix; unique per role and storage kind
    #[must_use]
    pub fn volume_prefix(&self, kind: SourceKind) -> &'static str {
        match (self, kind) {
            (CredentialRole::Key, SourceKind::Secret) => SECRET_KEY_VOLUME_PREFIX,
            (CredentialRole::Key, SourceKind::ConfigMap) => CONFIGMAP_KEY_VOLUME_PREFIX,
            (CredentialRole::Cert, SourceKind::Secret) => SECRET_CERT_VOLUME_PREFIX,
            (CredentialRole::Cert, SourceKind::ConfigMap) => CONFIGMAP_CERT_VOLUME_PREFIX,
            (CredentialRole::ClientCa, SourceKind::Secret) => SECRET_CLIENT_CA_VOLUME_PREFIX,
            (CredentialRole::ClientCa, SourceKind::ConfigMap) => {
                CONFIGMAP_CLIENT_CA_VOLUME_PREFIX
            }
        }
    }
}

/// A volume together with the mount that exposes one of its keys
#[derive(Debug, Clone, PartialEq)]
pub struct MountDeclaration {
    pub volume: Volume,
    pub volume_mount: VolumeMount,
}

/// Plan the mount for a single credential
///
/// Returns `None` for an unset selector. The volume is named
/// `name_prefix + resource name`.
#[must_use]
pub fn plan_mount(
    selector: &CredentialSelector,
    name_prefix: &str,
    target_path: &str,
) -> Option<MountDeclaration> {
    let source = selector.source()?;
    let volume_name = format!("{name_prefix}{}", source.name);

    let volume = match source.kind {
        SourceKind::Secret => Volume {
            name: volume_name.clone(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(source.name.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
        SourceKind::ConfigMap => Volume {
            name: volume_name.clone(),
            config_map: Some(ConfigMapVolumeSource {
                name: source.name.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        },
    };

    let volume_mount = VolumeMount {
        name: volume_name,
        read_only: Some(true),
        mount_path: target_path.to_string(),
        sub_path: Some(source.key.to_string()),
        ..Default::default()
    };

    Some(MountDeclaration {
        volume,
        volume_mount,
    })
}

/// Plan the mount for `selector` in `role`, choosing the prefix from its kind
#[must_use]
pub fn plan_role_mount(
    role: CredentialRole,
    selector: &CredentialSelector,
    target_path: &str,
) -> Option<MountDeclaration> {
    let kind = selector.kind()?;
    let declaration = plan_mount(selector, role.volume_prefix(kind), target_path)?;
    debug!(
        role = role.as_str(),
        volume = %declaration.volume.name,
        mount_path = %declaration.volume_mount.mount_path,
        "Planned TLS credential mount"
    );
    Some(declaration)
}

/// Plan mounts for all credentials: key first, then cert and client CA when set
///
/// # Errors
///
/// [`WebConfigError::MissingKeySelector`] if `key` is unset.
pub fn plan_all(
    key: &CredentialSelector,
    cert: &CredentialSelector,
    client_ca: &CredentialSelector,
    paths: &ResolvedPaths,
) -> Result<Vec<MountDeclaration>> {
    let key_mount = plan_role_mount(CredentialRole::Key, key, &paths.key)
        .ok_or(WebConfigError::MissingKeySelector)?;

    let mut declarations = vec![key_mount];
    declarations.extend(plan_role_mount(CredentialRole::Cert, cert, &paths.cert));
    declarations.extend(plan_role_mount(
        CredentialRole::ClientCa,
        client_ca,
        &paths.client_ca,
    ));
    Ok(declarations)
}

/// Split declarations into the parallel lists a pod spec expects
#[must_use]
pub fn into_volumes_and_mounts(
    declarations: Vec<MountDeclaration>,
) -> (Vec<Volume>, Vec<VolumeMount>) {
    declarations
        .into_iter()
        .map(|d| (d.volume, d.volume_mount))
        .unzip()
}
