//! # Web Config
//!
//! Pure transforms from a TLS server spec to the two artifacts the monitored
//! process needs: the web config document and the mounts exposing the TLS
//! credentials it references.
//!
//! ```text
//! TlsServerSpec ──► assets (per credential path) ──┬──► render  ──► YAML bytes
//!                                                  └──► mounts  ──► Volumes + VolumeMounts
//! ```

pub mod assets;
pub mod config;
pub mod credentials;
pub mod mounts;
pub mod render;
pub mod selector;

pub use assets::resolve_asset_path;
pub use config::WebConfig;
pub use credentials::TlsCredentials;
pub use mounts::{
    into_volumes_and_mounts, plan_all, plan_mount, plan_role_mount, CredentialRole,
    MountDeclaration,
};
pub use render::{render, ResolvedPaths, TlsServerConfig, TlsServerSpec, WebConfigDocument};
pub use selector::{CredentialSelector, CredentialSource, SourceKind};
