//! # Constants
//!
//! Shared constants used for web config generation.
//!
//! Volume names, sub-paths and default paths must stay stable: pods that were
//! rendered by an earlier release are compared byte-for-byte against freshly
//! planned mounts.

/// Name of the volume carrying the rendered web config document
pub const WEB_CONFIG_VOLUME_NAME: &str = "web-config";

/// Key inside the web config Secret holding the rendered document
pub const WEB_CONFIG_FILE_KEY: &str = "web-config.yaml";

/// Command line flag the monitored process reads its web config from
pub const WEB_CONFIG_FILE_FLAG: &str = "--web.config.file";

/// Volume name prefix for a TLS key held in a Secret
pub const SECRET_KEY_VOLUME_PREFIX: &str = "web-config-tls-secret-key-";

/// Volume name prefix for a TLS key held in a ConfigMap
pub const CONFIGMAP_KEY_VOLUME_PREFIX: &str = "web-config-tls-configmap-key-";

/// Volume name prefix for a certificate held in a Secret
pub const SECRET_CERT_VOLUME_PREFIX: &str = "web-config-tls-secret-cert-";

/// Volume name prefix for a certificate held in a ConfigMap
pub const CONFIGMAP_CERT_VOLUME_PREFIX: &str = "web-config-tls-configmap-cert-";

/// Volume name prefix for a client CA held in a Secret
pub const SECRET_CLIENT_CA_VOLUME_PREFIX: &str = "web-config-tls-secret-client-ca-";

/// Volume name prefix for a client CA held in a ConfigMap
pub const CONFIGMAP_CLIENT_CA_VOLUME_PREFIX: &str = "web-config-tls-configmap-client-ca-";

/// Default name of the Secret the rendered web config is stored in
pub const DEFAULT_WEB_CONFIG_SECRET_NAME: &str = "web-config";

/// Default location of the web config file inside the container
pub const DEFAULT_WEB_CONFIG_FILE_PATH: &str = "/etc/prometheus/web_config/web-config.yaml";

/// Default directory TLS credentials are mounted under
pub const DEFAULT_TLS_ASSETS_DIR: &str = "/etc/prometheus/web_config/certs";

/// Default global log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";
