//! HTTP editing host for the campus website editor.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - The live page preview at `/`
//! - JSON endpoints for field edits, navigation editing and the editor panel
//!
//! One [`EditorSession`](cw_site::EditorSession) is shared by all requests.
//! Requests are processed one at a time against it, so every edit is
//! persisted before the next request observes the document.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cw_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         storage_dir: PathBuf::from(".cw"),
//!         storage_key: "campus-website-data".to_owned(),
//!         college_name: None,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (cw-server)
//!                        │
//!                        ├─► GET /            ──► cw-renderer (preview HTML)
//!                        │
//!                        └─► /api/*           ──► EditorSession (cw-site)
//!                                                      │
//!                                                      └─► ContentStore ──► FsStore
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use cw_site::{ContentStore, DEFAULT_KEY, EditorSession};
use cw_storage::{FsStore, KeyValueStore};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding persisted content.
    pub storage_dir: PathBuf,
    /// Key the content document is stored under.
    pub storage_key: String,
    /// College name supplied by the host, overriding the stored one.
    pub college_name: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            storage_dir: PathBuf::from(".cw"),
            storage_key: DEFAULT_KEY.to_owned(),
            college_name: None,
        }
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Arc<dyn KeyValueStore> = Arc::new(FsStore::new(config.storage_dir.clone()));
    let store = ContentStore::new(storage, config.storage_key.clone());
    let session = EditorSession::open(store, config.college_name.clone());

    let state = Arc::new(AppState::new(session));
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, storage = %config.storage_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the editor configuration.
#[must_use]
pub fn server_config_from_cw_config(config: &cw_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        storage_dir: config.storage_resolved.dir.clone(),
        storage_key: config.storage_resolved.key.clone(),
        college_name: config.site.college_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use cw_config::Config;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_cw_config() {
        let mut config = Config::default();
        config.server.port = 8080;
        config.site.college_name = Some("Riverside College".to_owned());

        let server = server_config_from_cw_config(&config);

        assert_eq!(server.port, 8080);
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.storage_key, "campus-website-data");
        assert_eq!(server.college_name.as_deref(), Some("Riverside College"));
    }
}
