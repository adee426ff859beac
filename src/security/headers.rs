//! Security response headers.
//!
//! # Responsibilities
//! - Provide the standard hardening header set for HTML responses
//!
//! # Design Decisions
//! - nosniff keeps browsers from reinterpreting the body's content type
//! - frame denial and a restrictive CSP limit the blast radius if an
//!   escaping bug ever ships

use axum::http::header::{HeaderName, HeaderValue};

/// Hardening headers applied to every response when enabled.
pub fn standard_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ),
        (
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ),
        (
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_static("default-src 'none'; style-src 'unsafe-inline'"),
        ),
    ]
}
