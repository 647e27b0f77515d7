//! # Errors
//!
//! Error type shared by the web config generator.
//!
//! Generation itself fails only for a TLS spec that cannot be turned into
//! credentials (missing key, ambiguous selector) or a YAML serialization
//! failure. Reading and parsing spec documents adds `Parse` and `Read`.
//! An unconfigured optional credential is not an error; it resolves to an
//! empty path and plans no mount.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebConfigError {
    /// Rendering the web config document failed
    ///
    /// Not reachable for specs built through the public API; treat as a bug.
    #[error("Failed to serialize web config document: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// TLS is enabled but no private key selector is configured
    #[error("TLS is enabled but no key selector is configured")]
    MissingKeySelector,

    /// A selector names both a Secret and a ConfigMap
    #[error("{role} selector must reference either a Secret or a ConfigMap, not both")]
    AmbiguousSelector { role: &'static str },

    /// A TLS spec document could not be parsed
    #[error("Failed to parse TLS spec: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// A TLS spec file could not be read
    #[error("Failed to read TLS spec from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = WebConfigError> = std::result::Result<T, E>;
