// src/routes/mod.rs
pub mod home;

use axum::{Router, routing::get};
use home::home_handler;
use tower_http::trace::TraceLayer;

/// Only `GET /` is routed; anything else gets axum's default 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home_handler))
        .layer(TraceLayer::new_for_http())
}
