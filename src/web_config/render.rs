//! # Web Config Document
//!
//! Renders the YAML file passed to the monitored process via
//! `--web.config.file`. The document layout follows the Prometheus
//! exporter-toolkit web configuration:
//! <https://prometheus.io/docs/prometheus/latest/configuration/https/>
//!
//! Field order in the output is the declaration order of [`TlsServerConfig`],
//! so the bytes are stable no matter how the input spec was assembled.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WebConfigError};
use crate::web_config::selector::CredentialSelector;

/// Desired TLS server behaviour with credentials still as selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsServerSpec {
    /// Private key. Required whenever TLS is enabled.
    pub key: CredentialSelector,
    pub cert: CredentialSelector,
    pub client_ca: CredentialSelector,
    pub client_auth_type: Option<String>,
    pub min_version: Option<String>,
    pub max_version: Option<String>,
    pub cipher_suites: Vec<String>,
    /// `None` leaves the server default in place; `Some(false)` is emitted
    pub prefer_server_cipher_suites: Option<bool>,
    pub curve_preferences: Vec<String>,
}

/// Asset paths of the three credentials, empty when not configured
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub key: String,
    pub cert: String,
    pub client_ca: String,
}

/// Top level of the web config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebConfigDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_server_config: Option<TlsServerConfig>,
}

/// `tls_server_config` section; fields serialize in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_ca_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cipher_suites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_server_cipher_suites: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub curve_preferences: Vec<String>,
}

impl TlsServerConfig {
    /// Build the section from a spec and the already resolved asset paths
    #[must_use]
    pub fn from_spec(spec: &TlsServerSpec, paths: &ResolvedPaths) -> Self {
        Self {
            cert_file: non_empty(&paths.cert),
            key_file: non_empty(&paths.key),
            client_auth_type: spec.client_auth_type.as_deref().and_then(non_empty),
            client_ca_file: non_empty(&paths.client_ca),
            min_version: spec.min_version.as_deref().and_then(non_empty),
            max_version: spec.max_version.as_deref().and_then(non_empty),
            cipher_suites: spec.cipher_suites.clone(),
            prefer_server_cipher_suites: spec.prefer_server_cipher_suites,
            curve_preferences: spec.curve_preferences.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Render the web config file contents
///
/// With no spec the result is an empty mapping (`{}`), which the monitored
/// process reads as "TLS disabled".
///
/// # Errors
///
/// [`WebConfigError::MissingKeySelector`] if the spec has no key selector,
/// [`WebConfigError::Serialize`] if YAML emission fails.
pub fn render(spec: Option<&TlsServerSpec>, paths: &ResolvedPaths) -> Result<Vec<u8>> {
    let document = match spec {
        None => WebConfigDocument::default(),
        Some(spec) => {
            if !spec.key.is_set() {
                return Err(WebConfigError::MissingKeySelector);
            }
            WebConfigDocument {
                tls_server_config: Some(TlsServerConfig::from_spec(spec, paths)),
            }
        }
    };

    let rendered = serde_yaml::to_string(&document)?;
    debug!(
        tls_enabled = document.tls_server_config.is_some(),
        bytes = rendered.len(),
        "Rendered web config document"
    );
    Ok(rendered.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ResolvedPaths {
        ResolvedPaths {
            key: "/certs/secret__tls_tls.key".to_string(),
            cert: "/certs/secret__tls_tls.crt".to_string(),
            client_ca: String::new(),
        }
    }

    fn spec() -> TlsServerSpec {
        TlsServerSpec {
            key: CredentialSelector::secret("tls", "tls.key"),
            cert: CredentialSelector::secret("tls", "tls.crt"),
            ..Default::default()
        }
    }

    fn render_str(spec: Option<&TlsServerSpec>, paths: &ResolvedPaths) -> String {
        String::from_utf8(render(spec, paths).unwrap()).unwrap()
    }

    #[test]
    fn test_render_without_spec_is_empty_mapping() {
        assert_eq!(render_str(None, &ResolvedPaths::default()), "{}\n");
    }

    #[test]
    fn test_render_minimal() {
        assert_eq!(
            render_str(Some(&spec()), &paths()),
            "tls_server_config:\n  cert_file: /certs/secret__tls_tls.crt\n  key_file: /certs/secret__tls_tls.key\n"
        );
    }

    #[test]
    fn test_render_emits_explicit_false() {
        let spec = TlsServerSpec {
            prefer_server_cipher_suites: Some(false),
            ..spec()
        };
        let rendered = render_str(Some(&spec), &paths());
        assert!(rendered.contains("  prefer_server_cipher_suites: false\n"));
    }

    #[test]
    fn test_render_omits_unset_tri_state() {
        let rendered = render_str(Some(&spec()), &paths());
        assert!(!rendered.contains("prefer_server_cipher_suites"));
    }

    #[test]
    fn test_render_skips_empty_strings() {
        let spec = TlsServerSpec {
            client_auth_type: Some(String::new()),
            min_version: Some(String::new()),
            ..spec()
        };
        let rendered = render_str(Some(&spec), &paths());
        assert!(!rendered.contains("client_auth_type"));
        assert!(!rendered.contains("min_version"));
    }

    #[test]
    fn test_render_rejects_missing_key() {
        let spec = TlsServerSpec {
            key: CredentialSelector::Unset,
            ..spec()
        };
        assert!(matches!(
            render(Some(&spec), &paths()),
            Err(WebConfigError::MissingKeySelector)
        ));
    }

    #[test]
    fn test_rendered_document_parses_back() {
        let spec = TlsServerSpec {
            cipher_suites: vec!["b".to_string(), "a".to_string()],
            ..spec()
        };
        let rendered = render(Some(&spec), &paths()).unwrap();
        let parsed: WebConfigDocument = serde_yaml::from_slice(&rendered).unwrap();
        let tls = parsed.tls_server_config.unwrap();
        assert_eq!(tls.cipher_suites, vec!["b", "a"]);
        assert_eq!(tls.key_file.as_deref(), Some("/certs/secret__tls_tls.key"));
    }
}
