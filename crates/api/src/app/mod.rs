//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storage wiring shared by every handler
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::{AppServices, build_services};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_request)))
}
