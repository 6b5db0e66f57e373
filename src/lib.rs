pub mod config;
pub mod db;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full application: HTML page and fragments, the JSON API and the health probe.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
