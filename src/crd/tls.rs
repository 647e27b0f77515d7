//! # Web TLS Configuration
//!
//! Wire types for the `web.tlsConfig` section of a monitoring resource and
//! their conversion into a [`TlsServerSpec`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::{Result, WebConfigError};
use crate::web_config::{CredentialRole, CredentialSelector, TlsServerSpec};

/// Web TLS configuration
///
/// # Example
///
/// ```yaml
/// keySecret:
///   name: prometheus-web-tls
///   key: tls.key
/// cert:
///   secret:
///     name: prometheus-web-tls
///     key: tls.crt
/// clientCA:
///   configMap:
///     name: client-ca
///     key: ca.crt
/// clientAuthType: RequireAndVerifyClientCert
/// minVersion: TLS12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebTlsConfig {
    /// Secret containing the TLS key for the server
    pub key_secret: KeySelector,
    /// Contains the TLS certificate for the server
    #[serde(default)]
    pub cert: SecretOrConfigMap,
    /// Contains the CA certificate for client certificate authentication to the server
    #[serde(default, rename = "clientCA")]
    pub client_ca: SecretOrConfigMap,
    /// Server policy for client authentication. Maps to ClientAuth Policies.
    /// For more detail on clientAuth options:
    /// <https://golang.org/pkg/crypto/tls/#ClientAuthType>
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_auth_type: Option<String>,
    /// Minimum TLS version that is acceptable. Defaults to TLS12.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    /// Maximum TLS version that is acceptable. Defaults to TLS13.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
    /// List of supported cipher suites for TLS versions up to TLS 1.2.
    /// If empty, Go default cipher suites are used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cipher_suites: Vec<String>,
    /// Controls whether the server selects the client's most preferred cipher
    /// suite, or the server's most preferred cipher suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_server_cipher_suites: Option<bool>,
    /// Elliptic curves that will be used in an ECDHE handshake, in preference order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub curve_preferences: Vec<String>,
}

/// Selects a key of a Secret or ConfigMap in the resource's namespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub struct KeySelector {
    /// Name of the referent
    pub name: String,
    /// The key to select
    pub key: String,
}

/// Either a Secret or a ConfigMap entry; at most one may be set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretOrConfigMap {
    /// Secret containing data to use for the targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<KeySelector>,
    /// ConfigMap containing data to use for the targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map: Option<KeySelector>,
}

impl SecretOrConfigMap {
    /// Convert into a [`CredentialSelector`] for `role`
    ///
    /// # Errors
    ///
    /// [`WebConfigError::AmbiguousSelector`] if both a Secret and a ConfigMap are set.
    pub fn to_selector(&self, role: CredentialRole) -> Result<CredentialSelector> {
        match (&self.secret, &self.config_map) {
            (Some(_), Some(_)) => Err(WebConfigError::AmbiguousSelector {
                role: role.as_str(),
            }),
            (Some(secret), None) => Ok(CredentialSelector::secret(&secret.name, &secret.key)),
            (None, Some(config_map)) => Ok(CredentialSelector::config_map(
                &config_map.name,
                &config_map.key,
            )),
            (None, None) => Ok(CredentialSelector::Unset),
        }
    }
}

impl WebTlsConfig {
    /// Parse a TLS config from YAML (or JSON)
    ///
    /// # Errors
    ///
    /// [`WebConfigError::Parse`] if the document does not match the schema.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents).map_err(WebConfigError::Parse)
    }

    /// Read and parse a TLS config file
    ///
    /// # Errors
    ///
    /// [`WebConfigError::Read`] if the file cannot be read, otherwise see
    /// [`WebTlsConfig::from_yaml`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| WebConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Validated server spec with credentials as selectors
    ///
    /// # Errors
    ///
    /// [`WebConfigError::AmbiguousSelector`] if the cert or client CA names
    /// both a Secret and a ConfigMap.
    pub fn to_server_spec(&self) -> Result<TlsServerSpec> {
        let cert = self
            .cert
            .to_selector(CredentialRole::Cert)
            .inspect_err(|e| warn!("Rejected web TLS config: {}", e))?;
        let client_ca = self
            .client_ca
            .to_selector(CredentialRole::ClientCa)
            .inspect_err(|e| warn!("Rejected web TLS config: {}", e))?;

        Ok(TlsServerSpec {
            key: CredentialSelector::secret(&self.key_secret.name, &self.key_secret.key),
            cert,
            client_ca,
            client_auth_type: self.client_auth_type.clone(),
            min_version: self.min_version.clone(),
            max_version: self.max_version.clone(),
            cipher_suites: self.cipher_suites.clone(),
            prefer_server_cipher_suites: self.prefer_server_cipher_suites,
            curve_preferences: self.curve_preferences.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(name: &str, key: &str) -> Option<KeySelector> {
        Some(KeySelector {
            name: name.to_string(),
            key: key.to_string(),
        })
    }

    #[test]
    fn test_to_selector_variants() {
        let secret = SecretOrConfigMap {
            secret: selector("s", "k"),
            config_map: None,
        };
        let config_map = SecretOrConfigMap {
            secret: None,
            config_map: selector("cm", "k"),
        };

        assert_eq!(
            secret.to_selector(CredentialRole::Cert).unwrap(),
            CredentialSelector::secret("s", "k")
        );
        assert_eq!(
            config_map.to_selector(CredentialRole::Cert).unwrap(),
            CredentialSelector::config_map("cm", "k")
        );
        assert_eq!(
            SecretOrConfigMap::default()
                .to_selector(CredentialRole::Cert)
                .unwrap(),
            CredentialSelector::Unset
        );
    }

    #[test]
    fn test_to_selector_rejects_both() {
        let both = SecretOrConfigMap {
            secret: selector("s", "k"),
            config_map: selector("cm", "k"),
        };
        match both.to_selector(CredentialRole::ClientCa) {
            Err(WebConfigError::AmbiguousSelector { role }) => assert_eq!(role, "client-ca"),
            other => panic!("Expected AmbiguousSelector, got {other:?}"),
        }
    }

    #[test]
    fn test_to_server_spec_keeps_tri_state() {
        let config = WebTlsConfig {
            key_secret: KeySelector {
                name: "s".to_string(),
                key: "tls.key".to_string(),
            },
            prefer_server_cipher_suites: Some(false),
            ..Default::default()
        };
        let spec = config.to_server_spec().unwrap();
        assert_eq!(spec.key, CredentialSelector::secret("s", "tls.key"));
        assert_eq!(spec.cert, CredentialSelector::Unset);
        assert_eq!(spec.prefer_server_cipher_suites, Some(false));
    }
}
