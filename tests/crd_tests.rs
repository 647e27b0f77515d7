//! # Web TLS Config Tests
//!
//! Tests for reading `web.tlsConfig` documents and converting them into
//! rendered web config files.

use std::io::Write;

use web_tls_config::crd::{KeySelector, WebTlsConfig};
use web_tls_config::web_config::{CredentialSelector, WebConfig};
use web_tls_config::WebConfigError;

const FULL_TLS_CONFIG: &str = r#"
keySecret:
  name: test-secret
  key: tls.keySecret
cert:
  secret:
    name: test-secret
    key: tls.crt
clientCA:
  configMap:
    name: test-configmap
    key: tls.ca
clientAuthType: RequireAnyClientCert
minVersion: TLS11
maxVersion: TLS13
cipherSuites:
  - cipher-1
  - cipher-2
preferServerCipherSuites: false
curvePreferences:
  - curve-1
  - curve-2
"#;

#[test]
fn test_deserialize_full_tls_config() {
    let config = WebTlsConfig::from_yaml(FULL_TLS_CONFIG).expect("Should parse full TLS config");

    assert_eq!(
        config.key_secret,
        KeySelector {
            name: "test-secret".to_string(),
            key: "tls.keySecret".to_string(),
        }
    );
    assert!(config.cert.secret.is_some());
    assert!(config.cert.config_map.is_none());
    assert!(config.client_ca.config_map.is_some());
    assert_eq!(config.client_auth_type.as_deref(), Some("RequireAnyClientCert"));
    assert_eq!(config.cipher_suites, vec!["cipher-1", "cipher-2"]);
    assert_eq!(config.prefer_server_cipher_suites, Some(false));
    assert_eq!(config.curve_preferences, vec!["curve-1", "curve-2"]);
}

#[test]
fn test_deserialize_minimal_tls_config() {
    let yaml = r#"
keySecret:
  name: web-tls
  key: tls.key
"#;
    let config = WebTlsConfig::from_yaml(yaml).expect("Should parse minimal TLS config");
    let spec = config.to_server_spec().expect("Should convert");

    assert_eq!(spec.key, CredentialSelector::secret("web-tls", "tls.key"));
    assert_eq!(spec.cert, CredentialSelector::Unset);
    assert_eq!(spec.client_ca, CredentialSelector::Unset);
    assert_eq!(spec.prefer_server_cipher_suites, None);
    assert!(spec.cipher_suites.is_empty());
}

#[test]
fn test_missing_key_secret_is_a_parse_error() {
    let yaml = r#"
cert:
  secret:
    name: web-tls
    key: tls.crt
"#;
    assert!(matches!(
        WebTlsConfig::from_yaml(yaml),
        Err(WebConfigError::Parse(_))
    ));
}

#[test]
fn test_ambiguous_cert_is_rejected() {
    let yaml = r#"
keySecret:
  name: web-tls
  key: tls.key
cert:
  secret:
    name: web-tls
    key: tls.crt
  configMap:
    name: web-tls
    key: tls.crt
"#;
    let config = WebTlsConfig::from_yaml(yaml).expect("Should parse");
    match config.to_server_spec() {
        Err(WebConfigError::AmbiguousSelector { role }) => assert_eq!(role, "cert"),
        other => panic!("Expected AmbiguousSelector, got {other:?}"),
    }
}

#[test]
fn test_full_tls_config_renders() {
    let spec = WebTlsConfig::from_yaml(FULL_TLS_CONFIG)
        .and_then(|config| config.to_server_spec())
        .expect("Should convert full TLS config");
    let contents = WebConfig::new("web-config")
        .generate_config_file_contents("/certs", Some(&spec))
        .expect("Should render");

    assert_eq!(
        String::from_utf8(contents).unwrap(),
        "tls_server_config:
  cert_file: /certs/secret__test-secret_tls.crt
  key_file: /certs/secret__test-secret_tls.keySecret
  client_auth_type: RequireAnyClientCert
  client_ca_file: /certs/configmap__test-configmap_tls.ca
  min_version: TLS11
  max_version: TLS13
  cipher_suites:
  - cipher-1
  - cipher-2
  prefer_server_cipher_suites: false
  curve_preferences:
  - curve-1
  - curve-2
"
    );
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("Should create temp file");
    file.write_all(FULL_TLS_CONFIG.as_bytes())
        .expect("Should write temp file");

    let config = WebTlsConfig::from_path(file.path()).expect("Should read TLS config file");
    assert_eq!(config.key_secret.name, "test-secret");
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let missing = dir.path().join("missing.yaml");

    match WebTlsConfig::from_path(&missing) {
        Err(WebConfigError::Read { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected Read error, got {other:?}"),
    }
}

#[test]
fn test_serialize_round_trips_wire_names() {
    let config = WebTlsConfig::from_yaml(FULL_TLS_CONFIG).expect("Should parse");
    let yaml = serde_yaml::to_string(&config).expect("Should serialize");

    assert!(yaml.contains("keySecret:"));
    assert!(yaml.contains("clientCA:"));
    assert!(yaml.contains("configMap:"));
    assert!(yaml.contains("preferServerCipherSuites: false"));
}

#[test]
fn test_json_schema_names_wire_fields() {
    let schema = schemars::schema_for!(WebTlsConfig);
    let json = serde_json::to_value(&schema).expect("Schema should serialize");
    let properties = json
        .get("properties")
        .and_then(|p| p.as_object())
        .expect("Schema should have properties");

    for field in ["keySecret", "cert", "clientCA", "cipherSuites", "curvePreferences"] {
        assert!(properties.contains_key(field), "Schema should contain {field}");
    }
}
