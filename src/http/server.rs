//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, timeouts)
//! - Bind server to listener
//! - Handle the greet, token, and health endpoints
//!
//! # Design Decisions
//! - Handlers return `PortalResult`; every failure funnels through the
//!   taxonomy in `error.rs` and renders a generic body
//! - Shared state is read-only behind `Arc`; requests share nothing
//!   mutable
//! - The token endpoint requires the env-sourced Bearer key; the
//!   presented credential is never logged

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use secrecy::{ExposeSecret, SecretString};
use tokio::net::TcpListener;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::PortalConfig;
use crate::datastore::{user_by_name, Datastore, MemoryDatastore};
use crate::error::{PortalError, PortalResult};
use crate::http::request::{
    propagate_request_id_layer, set_request_id_layer, GreetParams,
};
use crate::http::response::{html_page, SystemStatus, TokenResponse};
use crate::listing::{ListingError, ListingRunner};
use crate::observability::metrics;
use crate::observability::redact::clean_for_log;
use crate::profile::ProfileStore;
use crate::render::greeting_page;
use crate::security::headers::standard_headers;
use crate::security::limits::{body_limit_layer, validate_param};
use crate::token::SessionToken;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PortalConfig>,
    pub datastore: Arc<dyn Datastore>,
    pub listings: Arc<ListingRunner>,
    pub profiles: Option<ProfileStore>,
    pub api_key: SecretString,
}

/// HTTP server for the portal.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and the
    /// env-sourced API key.
    pub fn new(config: PortalConfig, api_key: SecretString) -> PortalResult<Self> {
        let datastore = MemoryDatastore::open(&config.datastore)
            .map_err(|e| PortalError::dependency("datastore", e))?;

        let listings = ListingRunner::new(
            &config.listings,
            Duration::from_secs(config.timeouts.exec_secs),
        );
        let profiles = ProfileStore::from_config(&config.profile);

        let state = AppState {
            config: Arc::new(config),
            datastore: Arc::new(datastore),
            listings: Arc::new(listings),
            profiles,
            api_key,
        };

        let router = Self::build_router(state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let config = state.config.clone();

        let mut router = Router::new()
            .route("/greet", get(greet_handler))
            .route("/token", get(token_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(middleware::from_fn(track_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(body_limit_layer(config.security.max_body_bytes))
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ));

        if config.security.enable_headers {
            for (name, value) in standard_headers() {
                router = router.layer(SetResponseHeaderLayer::overriding(name, value));
            }
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Greet handler: lookup, optional listing, optional profile, rendered
/// as an escaped HTML page.
async fn greet_handler(
    State(state): State<AppState>,
    Query(params): Query<GreetParams>,
) -> PortalResult<Response> {
    let max_len = state.config.security.max_input_len;

    let input = params
        .input
        .ok_or_else(|| PortalError::validation("input parameter is required"))?;
    validate_param("input", &input, max_len)?;

    tracing::debug!(input = %clean_for_log(&input), "Greet request");

    let records = state
        .datastore
        .fetch(user_by_name(&input))
        .await
        .map_err(|e| PortalError::dependency("datastore", e))?;

    let listing = match &params.listing {
        Some(alias) => {
            validate_param("listing", alias, max_len)?;
            match state.listings.run(alias).await {
                Ok(text) => Some(text),
                Err(ListingError::UnknownAlias) => {
                    return Err(PortalError::validation("unknown listing alias"));
                }
                Err(e) => return Err(PortalError::dependency("listing", e)),
            }
        }
        None => None,
    };

    // Fail closed: a configured profile that cannot be loaded aborts the
    // request rather than rendering a partial page.
    let profile = match &state.profiles {
        Some(store) => Some(
            store
                .load()
                .map_err(|e| PortalError::dependency("profile store", e))?,
        ),
        None => None,
    };

    let page = greeting_page(&input, &records, listing.as_deref(), profile.as_ref());
    Ok(html_page(page))
}

/// Token handler: Bearer-authenticated CSPRNG token issuance.
async fn token_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let expected = format!("Bearer {}", state.api_key.expose_secret());
    if presented != Some(expected.as_str()) {
        // Log the outcome, never the credential.
        tracing::warn!(
            credential_present = presented.is_some(),
            "Token request rejected"
        );
        metrics::record_rejected("unauthorized");
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let token = SessionToken::generate();
    Json(TokenResponse { token }).into_response()
}

/// Health handler.
async fn health_handler() -> Json<SystemStatus> {
    Json(SystemStatus::current())
}

/// Record request count and latency per endpoint.
async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = match request.uri().path() {
        "/greet" => "greet",
        "/token" => "token",
        "/health" => "health",
        _ => "other",
    };

    let response = next.run(request).await;
    metrics::record_request(endpoint, response.status().as_u16(), start);
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
