//! Stored profile loading.
//!
//! # Responsibilities
//! - Load the persisted profile for display on the greeting page
//! - Enforce a size cap before reading
//! - Accept only the schema-validated, non-executable JSON form
//!
//! # Design Decisions
//! - `deny_unknown_fields`: a payload that smuggles extra structure is
//!   rejected, not silently accepted
//! - Rejection happens before any field of the payload is used
//! - The cap is checked against file metadata first, so an oversized
//!   payload is never pulled into memory

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ProfileConfig;

/// Persisted profile record.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredProfile {
    pub display_name: String,
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Errors from profile loading.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Profile file could not be read.
    #[error("profile read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file exceeds the configured size cap.
    #[error("profile is {size} bytes, cap is {max}")]
    TooLarge { size: u64, max: u64 },

    /// Payload did not validate against the profile schema.
    #[error("profile format invalid: {0}")]
    Format(#[from] serde_json::Error),
}

/// Loads profiles from a configured path with a size cap.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
    max_bytes: u64,
}

impl ProfileStore {
    /// Build a store when a profile path is configured.
    pub fn from_config(config: &ProfileConfig) -> Option<Self> {
        config.path.as_ref().map(|path| Self {
            path: path.clone(),
            max_bytes: config.max_bytes,
        })
    }

    /// Load and validate the stored profile.
    pub fn load(&self) -> Result<StoredProfile, ProfileError> {
        let meta = std::fs::metadata(&self.path)?;
        if meta.len() > self.max_bytes {
            return Err(ProfileError::TooLarge {
                size: meta.len(),
                max: self.max_bytes,
            });
        }

        let bytes = std::fs::read(&self.path)?;
        let profile: StoredProfile = serde_json::from_slice(&bytes)?;
        Ok(profile)
    }
}
