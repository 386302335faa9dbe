//! API route handlers for the gateway.

use axum::response::Html;
use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;

use super::server::AppState;

/// Coerce the query field of a request body to a string.
///
/// Reads `question`, falling back to `query`. Numbers and booleans keep
/// their JSON text; anything else (absent, null, arrays, objects) is "".
pub(crate) fn query_text(body: &Value) -> String {
    let field = body
        .get("question")
        .filter(|v| !v.is_null())
        .or_else(|| body.get("query"));
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Serve the search page.
pub async fn index_page() -> Html<&'static str> {
    Html(super::page::index_html())
}

/// Keyword search over the knowledge base.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let query = query_text(&body);
    let results = state.knowledge.search(&query);
    tracing::debug!(
        query_chars = query.chars().count(),
        results = results.len(),
        "knowledge search"
    );
    Json(serde_json::json!({
        "results": results,
        "count": results.len(),
        "query": query,
        "timestamp": timestamp(),
    }))
}

/// List every topic with its keywords, in store order.
pub async fn list_topics(State(state): State<Arc<AppState>>) -> Json<Value> {
    let topics: Vec<_> = state
        .knowledge
        .topics()
        .iter()
        .map(|t| serde_json::json!({"title": t.title, "keywords": t.keywords}))
        .collect();
    Json(serde_json::json!({"topics": topics, "count": topics.len()}))
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "knowbase-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "topics": state.knowledge.len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}
