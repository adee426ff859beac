//! Response assembly.
//!
//! # Responsibilities
//! - Shape the JSON bodies for /health and /token
//! - Wrap rendered pages as HTML responses
//!
//! # Design Decisions
//! - HTML bodies are produced only by `render::greeting_page`, which
//!   escapes every dynamic value; this module adds no content of its own
//! - JSON bodies carry only server-generated values

use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use crate::token::SessionToken;

/// Body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
}

impl SystemStatus {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            status: "operational",
        }
    }
}

/// Body for `GET /token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: SessionToken,
}

/// Wrap an already-escaped page as an HTML response.
pub fn html_page(page: String) -> Response {
    Html(page).into_response()
}
