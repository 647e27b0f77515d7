//! # Asset Paths
//!
//! Deterministic file locations for TLS credentials inside the container.

use crate::web_config::selector::CredentialSelector;

/// Path at which `selector` is mounted under `mount_prefix`
///
/// Returns `<mount_prefix>/<kind>__<name>_<key>`, or an empty string when the
/// selector is unset. Never fails: empty names or keys still yield a path.
///
/// # Example
///
/// ```
/// use web_tls_config::web_config::{resolve_asset_path, CredentialSelector};
///
/// let cert = CredentialSelector::secret("web-tls", "tls.crt");
/// assert_eq!(
///     resolve_asset_path(&cert, "/etc/certs/"),
///     "/etc/certs/secret__web-tls_tls.crt"
/// );
/// assert_eq!(resolve_asset_path(&CredentialSelector::Unset, "/etc/certs"), "");
/// ```
#[must_use]
pub fn resolve_asset_path(selector: &CredentialSelector, mount_prefix: &str) -> String {
    match selector.source() {
        Some(source) => join_path(mount_prefix, &source.to_string()),
        None => String::new(),
    }
}

/// Join prefix and file name, then clean the result lexically
fn join_path(prefix: &str, file_name: &str) -> String {
    if prefix.is_empty() {
        return clean_path(file_name);
    }
    clean_path(&format!("{prefix}/{file_name}"))
}

/// Lexical path cleanup: repeated `/` collapse to one, `.` segments are
/// dropped and `..` removes the preceding segment. `..` never climbs above
/// the root of an absolute path.
fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_secret_and_configmap() {
        let secret = CredentialSelector::secret("test-secret", "tls.key");
        let config_map = CredentialSelector::config_map("test-configmap", "tls.crt");

        assert_eq!(
            resolve_asset_path(&secret, "/web_certs_path_prefix"),
            "/web_certs_path_prefix/secret__test-secret_tls.key"
        );
        assert_eq!(
            resolve_asset_path(&config_map, "/web_certs_path_prefix"),
            "/web_certs_path_prefix/configmap__test-configmap_tls.crt"
        );
    }

    #[test]
    fn test_resolve_unset_is_empty() {
        assert_eq!(resolve_asset_path(&CredentialSelector::Unset, "/certs"), "");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let selector = CredentialSelector::secret("s", "k");
        let first = resolve_asset_path(&selector, "/certs");
        let second = resolve_asset_path(&selector, "/certs");
        assert_eq!(first, second);
    }

    #[test]
    fn test_kinds_never_collide() {
        let secret = CredentialSelector::secret("same", "tls.crt");
        let config_map = CredentialSelector::config_map("same", "tls.crt");
        assert_ne!(
            resolve_asset_path(&secret, "/certs"),
            resolve_asset_path(&config_map, "/certs")
        );
    }

    #[test]
    fn test_join_normalizes_separator() {
        assert_eq!(join_path("/certs", "a"), "/certs/a");
        assert_eq!(join_path("/certs/", "a"), "/certs/a");
        assert_eq!(join_path("/certs//", "a"), "/certs/a");
        assert_eq!(join_path("/", "a"), "/a");
        assert_eq!(join_path("", "a"), "a");
    }

    #[test]
    fn test_prefix_is_cleaned() {
        let selector = CredentialSelector::secret("n", "k");
        assert_eq!(resolve_asset_path(&selector, "/a//b"), "/a/b/secret__n_k");
        assert_eq!(resolve_asset_path(&selector, "/a/./b/"), "/a/b/secret__n_k");
        assert_eq!(resolve_asset_path(&selector, "/a/../b"), "/b/secret__n_k");
        assert_eq!(resolve_asset_path(&selector, "certs/"), "certs/secret__n_k");
        assert_eq!(resolve_asset_path(&selector, "./certs"), "certs/secret__n_k");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("/.."), "/");
        assert_eq!(clean_path("../a/../.."), "../..");
        assert_eq!(clean_path("a/.."), ".");
        assert_eq!(clean_path("//x///y/"), "/x/y");
    }

    #[test]
    fn test_empty_name_and_key_still_yield_path() {
        let selector = CredentialSelector::secret("", "");
        assert_eq!(resolve_asset_path(&selector, "/certs"), "/certs/secret___");
    }
}
