//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use secrecy::SecretString;
use tokio::net::TcpListener;

use user_portal::config::PortalConfig;
use user_portal::HttpServer;

/// API key used by the test portal.
pub const TEST_API_KEY: &str = "test-api-key-3f1c";

/// Start a portal on an ephemeral port, returning its address.
pub async fn spawn_portal(config: PortalConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, SecretString::from(TEST_API_KEY.to_string()))
        .expect("portal should build");

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Give the acceptor a beat to come up.
    tokio::time::sleep(Duration::from_millis(50)).await;
    addr
}

/// Base config for tests: defaults plus an ephemeral bind address.
pub fn test_config() -> PortalConfig {
    let mut config = PortalConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config
}
