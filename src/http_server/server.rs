//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::http::{header, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::dataset::{Dataset, DatasetSlot};

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::query_routes::query_routes;

/// Content-Security-Policy sent with every response
pub const CONTENT_SECURITY_POLICY: &str = "script-src 'self' 'unsafe-eval' 'unsafe-inline';";

/// Number of sample values logged per column after loading
const STARTUP_SAMPLE_SIZE: usize = 5;

/// HTTP server for the query API
pub struct HttpServer {
    config: HttpServerConfig,
    dataset: Arc<DatasetSlot>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(dataset: Arc<DatasetSlot>) -> Self {
        Self::with_config(HttpServerConfig::default(), dataset)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, dataset: Arc<DatasetSlot>) -> Self {
        let router = Self::build_router(&config, dataset.clone());
        Self {
            config,
            dataset,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, dataset: Arc<DatasetSlot>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // /health and /info at root level
            .merge(observability_routes(dataset.clone()))
            // POST /api/query
            .nest("/api", query_routes(dataset))
            .layer(cors)
            // Outside CORS so preflight responses carry the header too
            .layer(SetResponseHeaderLayer::overriding(
                header::CONTENT_SECURITY_POLICY,
                HeaderValue::from_static(CONTENT_SECURITY_POLICY),
            ))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the shared dataset slot
    pub fn dataset(&self) -> Arc<DatasetSlot> {
        self.dataset.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;

        info!(%addr, "gridquery HTTP server listening");
        info!("endpoints: POST /api/query, GET /health, GET /info");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Loads the dataset on a blocking task and installs it in `slot`.
///
/// A failed load is logged and leaves the slot empty, so queries keep
/// answering 503 instead of reporting zero matches.
pub fn spawn_loader(slot: Arc<DatasetSlot>, path: PathBuf) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(path = %path.display(), "starting dataset load");
        let started = Instant::now();

        let loaded = tokio::task::spawn_blocking(move || Dataset::load(&path)).await;

        match loaded {
            Ok(Ok(dataset)) => {
                dataset.summary(STARTUP_SAMPLE_SIZE).log();
                info!(elapsed_ms = started.elapsed().as_millis() as u64, "dataset ready");
                if slot.install(Arc::new(dataset)).is_err() {
                    error!("dataset slot already filled; keeping the existing snapshot");
                }
            }
            Ok(Err(e)) => error!(error = %e, "dataset load failed"),
            Err(e) => error!(error = %e, "dataset loader task panicked"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(Arc::new(DatasetSlot::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
        assert!(!server.dataset().is_loaded());
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(8080);
        let server = HttpServer::with_config(config, Arc::new(DatasetSlot::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".into()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, Arc::new(DatasetSlot::new())).router();
    }

    #[tokio::test]
    async fn test_loader_missing_file_leaves_slot_empty() {
        let slot = Arc::new(DatasetSlot::new());
        spawn_loader(slot.clone(), PathBuf::from("/definitely/not/here.geojson"))
            .await
            .unwrap();
        assert!(!slot.is_loaded());
    }
}
