//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the portal.
//! All types derive Serde traits for deserialization from config files.
//!
//! Secrets are never part of this schema: the file carries only the NAME
//! of the environment variable a secret is read from.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the portal.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PortalConfig {
    /// Listener configuration (bind address, connection limits).
    pub listener: ListenerConfig,

    /// Datastore settings.
    pub datastore: DatastoreConfig,

    /// Directory listing vocabulary.
    pub listings: ListingConfig,

    /// Stored profile settings.
    pub profile: ProfileConfig,

    /// Token endpoint authentication.
    pub auth: AuthConfig,

    /// Request hardening limits.
    pub security: SecurityConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            max_connections: 1_024,
        }
    }
}

/// Datastore configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DatastoreConfig {
    /// Optional JSON seed file for the users table. Built-in rows are
    /// used when absent.
    pub seed_path: Option<PathBuf>,
}

/// Directory listing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Fixed vocabulary: alias → absolute directory path. Requests may
    /// only name an alias; paths are operator-controlled.
    pub aliases: BTreeMap<String, PathBuf>,

    /// Cap on captured subprocess stdout, in bytes.
    pub max_output_bytes: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            aliases: BTreeMap::new(),
            max_output_bytes: 16 * 1024,
        }
    }
}

/// Stored profile configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Path to the persisted profile (JSON). No profile section is
    /// rendered when absent.
    pub path: Option<PathBuf>,

    /// Maximum accepted profile size in bytes.
    pub max_bytes: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_bytes: 64 * 1024,
        }
    }
}

/// Token endpoint authentication.
///
/// The key itself lives in the environment; the file names the variable.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Environment variable holding the API key (Bearer token).
    pub api_key_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key_env: "PORTAL_API_KEY".to_string(),
        }
    }
}

/// Request hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum accepted length of the `input` parameter, in characters.
    pub max_input_len: usize,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Enable security response headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_len: 128,
            max_body_bytes: 64 * 1024,
            enable_headers: true,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// Listing subprocess timeout in seconds.
    pub exec_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 10,
            exec_secs: 2,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
