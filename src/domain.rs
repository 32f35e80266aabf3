//! Request and result types for configuration resolution

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default base address of the key-value store HTTP API.
pub const DEFAULT_STORE_ADDRESS: &str = "http://localhost:2379";

/// Default API path segment between the base address and `/kv/range`.
pub const DEFAULT_API_PATH: &str = "v3alpha";

/// Environment variable overriding the store base address.
pub const STORE_ADDRESS_VAR: &str = "ETCD_CONN";

/// Suffix appended to the namespace to form the exclusive upper bound of
/// the prefix range scan.
pub const RANGE_END_SUFFIX: &str = "zzzzz";

/// The resolved configuration: normalized lowerCamelCase key to value.
///
/// Exactly one entry per distinct normalized key; the value is the one from
/// the highest-priority source that produced the key (command line >
/// environment > key-value store). Owned exclusively by the caller.
pub type ResolvedConfig = BTreeMap<String, String>;

/// Declarative input to a resolution call: which namespaces to consult.
///
/// Command-line arguments are always scanned; the store and environment
/// stages only run when their namespace is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolveRequest {
    /// Key prefix selecting store entries; enables the store stage.
    pub etcd_namespace: Option<String>,

    /// Store API path segment; defaults to [`DEFAULT_API_PATH`].
    pub etcd_api_path: Option<String>,

    /// Environment variable name prefix (without the trailing `_`);
    /// enables the environment stage.
    pub env_namespace: Option<String>,
}

impl ResolveRequest {
    /// Create an empty request (command-line stage only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the key-value store stage for the given key prefix.
    pub fn etcd_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.etcd_namespace = Some(namespace.into());
        self
    }

    /// Override the store API path segment.
    pub fn etcd_api_path(mut self, path: impl Into<String>) -> Self {
        self.etcd_api_path = Some(path.into());
        self
    }

    /// Enable the environment stage for the given name prefix.
    pub fn env_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.env_namespace = Some(namespace.into());
        self
    }
}
