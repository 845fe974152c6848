use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Read-only router over the pipeline's persisted artifacts. None of the
/// routes mutate anything; the documents are re-read per request so a
/// pipeline re-run is visible without restarting the server.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/get_sentiment/:company", get(handlers::get_sentiment))
        .route("/get_news/:company", get(handlers::get_news))
        .route("/get_audio/:company", get(handlers::get_audio))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use nv_core::{Config, Result};
}
