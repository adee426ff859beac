//! Request limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size
//! - Enforce maximum `input` parameter length
//!
//! # Design Decisions
//! - Limits checked before any downstream work (early rejection)
//! - Length is measured in characters so multi-byte input cannot dodge
//!   the cap

use tower_http::limit::RequestBodyLimitLayer;

use crate::error::{PortalError, PortalResult};

/// Body size limit layer for the router.
pub fn body_limit_layer(max_body_bytes: usize) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_body_bytes)
}

/// Validate an untrusted request parameter.
///
/// Rejects empty, over-long, and control-character-bearing values.
/// Metacharacters are NOT rejected here: downstream layers are required
/// to treat them as data, and tests hold them to that.
pub fn validate_param(name: &str, value: &str, max_len: usize) -> PortalResult<()> {
    if value.is_empty() {
        return Err(PortalError::validation(format!("{name} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(PortalError::validation(format!(
            "{name} exceeds {max_len} characters"
        )));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(PortalError::validation(format!(
            "{name} contains control characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_passes() {
        assert!(validate_param("input", "alice", 128).is_ok());
    }

    #[test]
    fn test_metacharacters_pass_validation() {
        // Safety for these comes from parameterization and escaping,
        // not from rejecting them at the door.
        assert!(validate_param("input", "' OR '1'='1", 128).is_ok());
        assert!(validate_param("input", "<script>", 128).is_ok());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(validate_param("input", "", 128).is_err());
    }

    #[test]
    fn test_overlong_rejected() {
        let long = "a".repeat(129);
        assert!(validate_param("input", &long, 128).is_err());
    }

    #[test]
    fn test_multibyte_counted_in_characters() {
        let value = "é".repeat(128);
        assert!(validate_param("input", &value, 128).is_ok());
    }

    #[test]
    fn test_control_characters_rejected() {
        assert!(validate_param("input", "alice\nERROR forged", 128).is_err());
        assert!(validate_param("input", "alice\x00", 128).is_err());
    }
}
