//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: process-wide state (the ledger aggregate)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: binding-layer validation for request payloads
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
