//! Defines routes for the gateway's HTTP surface.
//!
//! ## Structure
//! - **File endpoints**
//!   - `POST /file`    — upload a multipart file (optional `?bucket=` override)
//!   - `GET  /file`    — issue a public or signed retrieval URL
//!
//! - **Listing endpoints**
//!   - `GET  /buckets` — list all buckets
//!   - `GET  /objects` — list every object key in a bucket (optional `?bucket=`)
//!
//! Every route is CORS-enabled for any origin and traced at the request level.

use crate::{
    handlers::{
        gateway_handlers::{download_file, list_buckets, list_objects, upload_file},
        health_handlers::{healthz, readyz},
    },
    services::gateway_service::GatewayService,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build and return the router for all gateway routes.
///
/// The router carries shared state (`GatewayService`) to all handlers.
pub fn routes() -> Router<GatewayService> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // file endpoints
        .route("/file", post(upload_file).get(download_file))
        // listing endpoints
        .route("/buckets", get(list_buckets))
        .route("/objects", get(list_objects))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
