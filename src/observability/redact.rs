//! Secret redaction and log sanitization.
//!
//! # Responsibilities
//! - Mask secret values before they can reach a log line
//! - Recognize secret-looking field names
//! - Strip control characters from untrusted strings bound for logs
//!
//! # Design Decisions
//! - Masking is total: no prefix or suffix of the secret survives
//! - Field-name matching is case-insensitive substring, erring toward
//!   masking too much rather than too little
//! - Sanitization removes CR/LF and other control bytes so untrusted
//!   input cannot forge additional log records

/// Placeholder emitted in place of any secret value.
pub const MASK: &str = "[REDACTED]";

/// Field-name fragments that mark a value as secret.
const SECRET_FIELD_MARKERS: &[&str] = &["password", "secret", "token", "api_key", "apikey", "credential", "authorization"];

/// Mask a secret value for logging. The raw value never appears in the
/// output, regardless of length or content.
pub fn mask_secret(_value: &str) -> &'static str {
    MASK
}

/// Returns true if a field with this name should be masked when logged.
pub fn is_secret_field(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SECRET_FIELD_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Strip control characters from an untrusted string before logging.
///
/// Newlines and carriage returns would let request data forge log
/// records; other control bytes can corrupt downstream log parsers.
pub fn clean_for_log(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

/// Render a request field for logging, masking it when its name is
/// secret-looking and sanitizing it otherwise.
pub fn log_field(name: &str, value: &str) -> String {
    if is_secret_field(name) {
        MASK.to_string()
    } else {
        clean_for_log(value)
    }
}
