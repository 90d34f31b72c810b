//! Router assembly.
//!
//! Merges the catalog and workflow routers, mounts them under the configured
//! base path, and applies the shared middleware stack.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Json};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::ports::ToolCatalog;

use super::catalog::{catalog_routes, CatalogAppState};
use super::workflow::{workflow_routes, WorkflowAppState};

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Rainstone - a cloud cost estimator for bioinformatics! Head to /tools to get started.";

/// Response body for `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Builds the complete application router.
pub fn build_router(catalog: Arc<dyn ToolCatalog>, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/", get(welcome))
        .merge(catalog_routes(CatalogAppState::new(catalog.clone())))
        .merge(workflow_routes(WorkflowAppState::new(catalog)));

    let router = match config.route_prefix() {
        Some(prefix) => Router::new().nest(prefix, routes),
        None => routes,
    };

    router
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins_list()))
}

/// CORS for the configured origins. Credentials are allowed, so methods
/// and headers are mirrored from the request rather than wildcarded.
///
/// A `*` entry allows any origin by echoing the request's `Origin` back.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::mirror_request());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
