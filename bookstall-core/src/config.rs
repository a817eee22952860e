//! Startup configuration supplied by the hosting environment.

use serde::{Deserialize, Serialize};

/// Namespace used when the host provides none.
pub const DEFAULT_NAMESPACE: &str = "default-app-id";

/// Environment-supplied configuration, read once at startup and passed
/// explicitly into session bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Application namespace scoping all collection paths.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Backend connection parameters, opaque to this crate. An empty
    /// object means no backend is configured.
    #[serde(default = "empty_connection")]
    pub connection: serde_json::Value,
    /// Credential token to sign in with, if the host provided one.
    #[serde(default)]
    pub initial_token: Option<String>,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn empty_connection() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            connection: empty_connection(),
            initial_token: None,
        }
    }
}

impl StoreConfig {
    /// Whether the backend is unconfigured. Degraded mode disables
    /// persistence entirely: no sign-in, no subscription, no writes.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        match &self.connection {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_config_is_degraded_with_default_namespace() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.namespace, DEFAULT_NAMESPACE);
        assert!(cfg.is_degraded());
        assert!(cfg.initial_token.is_none());
    }

    #[test]
    fn populated_connection_is_not_degraded() {
        let cfg = StoreConfig {
            connection: json!({ "projectId": "bookstall-prod" }),
            ..StoreConfig::default()
        };
        assert!(!cfg.is_degraded());
    }

    #[test]
    fn null_connection_counts_as_degraded() {
        let cfg = StoreConfig {
            connection: serde_json::Value::Null,
            ..StoreConfig::default()
        };
        assert!(cfg.is_degraded());
    }

    #[test]
    fn missing_fields_take_defaults_when_deserialized() {
        let cfg: StoreConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(cfg, StoreConfig::default());
    }
}
