//! # Hashpass Web
//!
//! A minimal single-process form front end for the hashpass generator.
//!
//! - `GET /` input form
//! - `POST /generate` derive and show a password
//! - `GET /about` static about page
//! - `GET /health` liveness check

pub mod config;
pub mod form;
pub mod routes;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router.
///
/// Handlers share no state; each request calls the core exactly once.
pub fn app() -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/about", get(routes::about))
        .route("/generate", post(routes::generate))
        .route("/health", get(routes::health))
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
