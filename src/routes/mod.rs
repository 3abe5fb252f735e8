use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        catalog::{CatalogSource, InMemoryCatalog, ReadingHistorySource},
        selection::SelectionConfig,
    },
};

pub mod recommendations;

/// Shared application state
pub struct AppState {
    pub history: Arc<dyn ReadingHistorySource>,
    pub catalog: Arc<dyn CatalogSource>,
    pub selection: SelectionConfig,
    /// Limit applied when a request doesn't pass one
    pub default_limit: usize,
}

impl AppState {
    pub fn new(history: Arc<dyn ReadingHistorySource>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            history,
            catalog,
            selection: SelectionConfig::default(),
            default_limit: SelectionConfig::default().min_limit,
        }
    }

    /// State served entirely from one in-memory catalog
    pub fn in_memory(catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self::new(catalog.clone(), catalog)
    }

    pub fn with_default_limit(mut self, default_limit: usize) -> Self {
        self.default_limit = default_limit;
        self
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users/:user_id/recommendations",
        get(recommendations::recommend),
    )
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
