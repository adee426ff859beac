//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits nonzero, addresses parse)
//! - Check the listing vocabulary is well-formed (safe alias names,
//!   absolute paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PortalConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::PortalConfig;

/// A single configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

fn err(errors: &mut Vec<ValidationError>, field: &str, message: impl Into<String>) {
    errors.push(ValidationError {
        field: field.to_string(),
        message: message.into(),
    });
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &PortalConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        err(
            &mut errors,
            "listener.bind_address",
            "not a valid socket address",
        );
    }
    if config.listener.max_connections == 0 {
        err(&mut errors, "listener.max_connections", "must be nonzero");
    }

    for (alias, path) in &config.listings.aliases {
        if alias.is_empty()
            || !alias
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            err(
                &mut errors,
                "listings.aliases",
                format!("alias {alias:?} must be lowercase alphanumeric with - or _"),
            );
        }
        if !path.is_absolute() {
            err(
                &mut errors,
                "listings.aliases",
                format!("path for alias {alias:?} must be absolute"),
            );
        }
    }
    if config.listings.max_output_bytes == 0 {
        err(&mut errors, "listings.max_output_bytes", "must be nonzero");
    }

    if config.profile.max_bytes == 0 {
        err(&mut errors, "profile.max_bytes", "must be nonzero");
    }

    if config.auth.api_key_env.is_empty() {
        err(&mut errors, "auth.api_key_env", "must name an environment variable");
    }

    if config.security.max_input_len == 0 || config.security.max_input_len > 1024 {
        err(
            &mut errors,
            "security.max_input_len",
            "must be between 1 and 1024",
        );
    }
    if config.security.max_body_bytes == 0 {
        err(&mut errors, "security.max_body_bytes", "must be nonzero");
    }

    if config.timeouts.request_secs == 0 {
        err(&mut errors, "timeouts.request_secs", "must be nonzero");
    }
    if config.timeouts.exec_secs == 0 {
        err(&mut errors, "timeouts.exec_secs", "must be nonzero");
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        err(
            &mut errors,
            "observability.log_level",
            "must be one of trace, debug, info, warn, error",
        );
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        err(
            &mut errors,
            "observability.metrics_address",
            "not a valid socket address",
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PortalConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_reported() {
        let mut config = PortalConfig::default();
        config.listener.bind_address = "nonsense".into();
        config.security.max_input_len = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"listener.bind_address"));
        assert!(fields.contains(&"security.max_input_len"));
        assert!(fields.contains(&"observability.log_level"));
    }

    #[test]
    fn test_relative_listing_path_rejected() {
        let mut config = PortalConfig::default();
        config
            .listings
            .aliases
            .insert("docs".into(), PathBuf::from("data/docs"));
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("absolute")));
    }

    #[test]
    fn test_metacharacter_alias_rejected() {
        let mut config = PortalConfig::default();
        config
            .listings
            .aliases
            .insert("docs; id".into(), PathBuf::from("/var/docs"));
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "listings.aliases"));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = PortalConfig::default();
        config.observability.metrics_address = "nonsense".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
