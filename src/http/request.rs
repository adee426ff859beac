//! Request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Define the query parameters the portal accepts
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Parameters arrive as untrusted strings; validation happens in the
//!   handler via `security::limits` before any use

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

/// Query parameters for `GET /greet`.
#[derive(Debug, Deserialize)]
pub struct GreetParams {
    /// The untrusted name to greet and look up.
    pub input: Option<String>,

    /// Optional listing alias; must match the configured vocabulary.
    pub listing: Option<String>,
}

/// Request ID generator backed by UUID v4.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Layer that stamps `x-request-id` on requests lacking one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Layer that propagates `x-request-id` onto responses.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_request_ids_are_unique_uuids() {
        let mut make = MakeRequestUuid;
        let req = Request::builder().body(Body::empty()).unwrap();

        let a = make.make_request_id(&req).unwrap();
        let b = make.make_request_id(&req).unwrap();
        assert_ne!(a.header_value(), b.header_value());
        assert_eq!(a.header_value().to_str().unwrap().len(), 36);
    }
}
