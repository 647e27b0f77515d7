//! # Credential Selector
//!
//! Reference to the Secret or ConfigMap entry a TLS credential is read from.

use std::fmt;

/// Kind of cluster object a credential is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Secret,
    ConfigMap,
}

impl SourceKind {
    /// Tag used in asset file names
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Secret => "secret",
            SourceKind::ConfigMap => "configmap",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a TLS credential lives: one key of a named Secret or ConfigMap
///
/// `Unset` is a regular state (e.g. no client CA configured) and resolves to
/// an empty asset path and no mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CredentialSelector {
    Secret {
        name: String,
        key: String,
    },
    ConfigMap {
        name: String,
        key: String,
    },
    #[default]
    Unset,
}

impl CredentialSelector {
    pub fn secret(name: impl Into<String>, key: impl Into<String>) -> Self {
        CredentialSelector::Secret {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn config_map(name: impl Into<String>, key: impl Into<String>) -> Self {
        CredentialSelector::ConfigMap {
            name: name.into(),
            key: key.into(),
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, CredentialSelector::Unset)
    }

    #[must_use]
    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            CredentialSelector::Secret { .. } => Some(SourceKind::Secret),
            CredentialSelector::ConfigMap { .. } => Some(SourceKind::ConfigMap),
            CredentialSelector::Unset => None,
        }
    }

    /// Name of the referenced Secret or ConfigMap
    #[must_use]
    pub fn resource_name(&self) -> Option<&str> {
        match self {
            CredentialSelector::Secret { name, .. } | CredentialSelector::ConfigMap { name, .. } => {
                Some(name.as_str())
            }
            CredentialSelector::Unset => None,
        }
    }

    /// Entry within the referenced Secret or ConfigMap
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            CredentialSelector::Secret { key, .. } | CredentialSelector::ConfigMap { key, .. } => {
                Some(key.as_str())
            }
            CredentialSelector::Unset => None,
        }
    }

    /// Borrowed view used to build asset file names and mounts
    #[must_use]
    pub fn source(&self) -> Option<CredentialSource<'_>> {
        match self {
            CredentialSelector::Secret { name, key } => Some(CredentialSource {
                kind: SourceKind::Secret,
                name,
                key,
            }),
            CredentialSelector::ConfigMap { name, key } => Some(CredentialSource {
                kind: SourceKind::ConfigMap,
                name,
                key,
            }),
            CredentialSelector::Unset => None,
        }
    }
}

/// A configured selector, split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSource<'a> {
    pub kind: SourceKind,
    pub name: &'a str,
    pub key: &'a str,
}

impl fmt::Display for CredentialSource<'_> {
    /// Asset file name: `<kind>__<name>_<key>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}__{}_{}", self.kind, self.name, self.key)
    }
}
