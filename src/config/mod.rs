//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PortalConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! Secrets:
//!     config file names an environment variable
//!     → loader.rs reads it at startup
//!     → SecretString (never logged, never serialized)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Secret values never appear in the file format

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_api_key, ConfigError};
pub use schema::{
    AuthConfig, DatastoreConfig, ListenerConfig, ListingConfig, ObservabilityConfig,
    PortalConfig, ProfileConfig, SecurityConfig, TimeoutConfig,
};
