//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store / validator / message catalog wiring
//! - `routes/`: HTTP routes + handlers
//! - `form.rs`: the shared add/edit submission flow
//! - `dto.rs`: form binding and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod form;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with(services::build_services(config))
}

/// Build the router around already-wired services (tests inject their own).
pub fn build_app_with(services: services::AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(Arc::new(services))),
        )
}
