//! # Resource Types
//!
//! Declarative types read from monitoring resources.
//!
//! ## Module Structure
//!
//! - `tls.rs` - Web TLS configuration (`web.tlsConfig`) and its selectors

mod tls;

pub use tls::{KeySelector, SecretOrConfigMap, WebTlsConfig};
