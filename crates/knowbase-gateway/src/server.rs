//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use axum::http::{HeaderValue, Method};
use knowbase_core::config::GatewayConfig;
use knowbase_knowledge::KnowledgeStore;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub gateway_config: GatewayConfig,
    /// Read-only after startup; handlers share it without locking.
    pub knowledge: Arc<KnowledgeStore>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(gateway_config: GatewayConfig, knowledge: KnowledgeStore) -> Self {
        Self {
            gateway_config,
            knowledge: Arc::new(knowledge),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/", get(super::routes::index_page))
        .route("/health", get(super::routes::health_check))
        .route("/api/search", post(super::routes::search))
        .route("/api/topics", get(super::routes::list_topics));

    // Unknown GET paths: static files when a directory is configured, else the search page
    let api = match shared.gateway_config.static_dir.as_deref() {
        Some(dir) => {
            tracing::info!("Serving static files from {dir}");
            api.fallback_service(ServeDir::new(dir))
        }
        None => api.fallback(get(super::routes::index_page)),
    };

    let origins = std::env::var("KNOWBASE_CORS_ORIGINS").ok();
    api.layer(cors_layer(origins.as_deref()))
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Allowed origins from a comma-separated list; unparseable entries are skipped.
fn parse_origins(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Ignoring CORS origin {s:?}: {e}");
                None
            }
        })
        .collect()
}

/// Read-only API: GET/POST from the configured origins, or any origin when unset.
/// Example: KNOWBASE_CORS_ORIGINS=https://kb.example.com,https://search.example.com
fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));
    match origins {
        Some(list) => cors.allow_origin(parse_origins(list)),
        None => cors.allow_origin(Any),
    }
}

/// Start the HTTP server and run until Ctrl-C.
pub async fn start(config: &GatewayConfig, knowledge: KnowledgeStore) -> anyhow::Result<()> {
    tracing::info!(
        "Knowledge base ready: {} topic(s), {} keyword(s)",
        knowledge.len(),
        knowledge.keyword_count()
    );

    let app = build_router(AppState::new(config.clone(), knowledge));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Gateway server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
