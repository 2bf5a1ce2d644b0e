// src/server/routes.rs
//! Axum router configuration for the registry server
//!
//! - JSON endpoints are gzip-compressed
//! - Anything that is not an API route falls through to the public
//!   directory, served with a long Cache-Control

use crate::server::handlers::{cache_control, categories, search};
use crate::server::ServerState;
use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

/// Create the main application router
pub fn create_router(state: Arc<ServerState>) -> Router {
    // Read-only public API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_cache = HeaderValue::from_str(&cache_control(state.config.catch_all_cache))
        .unwrap_or_else(|_| HeaderValue::from_static("public"));
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            static_cache,
        ))
        .service(ServeDir::new(&state.config.public_dir));

    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search::search))
        .route("/search/", get(search::search))
        .route("/categories", get(categories::categories))
        .route("/categories/", get(categories::categories))
        .layer(CompressionLayer::new())
        .fallback_service(static_files)
        .with_state(state)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::ServerConfig;
    use crate::store::{PackageStore, StaticSource};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let store = PackageStore::open(StaticSource::default()).unwrap();
        let state = Arc::new(ServerState::new(ServerConfig::default(), store));
        let app = create_router(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
