//! Web TLS Config Library
//!
//! Computes, for a monitored process configured with TLS, where each TLS
//! credential is mounted, the `--web.config.file` document enabling TLS with
//! those credentials, and the Kubernetes volumes and mounts exposing them.
//!
//! ## Quick Start
//!
//! ```rust
//! use web_tls_config::web_config::{CredentialSelector, TlsCredentials, TlsServerSpec, WebConfig};
//!
//! let spec = TlsServerSpec {
//!     key: CredentialSelector::secret("web-tls", "tls.key"),
//!     cert: CredentialSelector::secret("web-tls", "tls.crt"),
//!     ..Default::default()
//! };
//!
//! let document = WebConfig::new("web-config")
//!     .generate_config_file_contents("/etc/certs", Some(&spec))
//!     .unwrap();
//! assert!(document.starts_with(b"tls_server_config:"));
//!
//! let (volumes, mounts) = TlsCredentials::from_spec("/etc/certs", &spec)
//!     .unwrap()
//!     .mount()
//!     .unwrap();
//! assert_eq!(volumes.len(), mounts.len());
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod observability;
pub mod web_config;

pub use error::{Result, WebConfigError};
