use axum::{routing::get, Router};

mod health;
pub mod todos;

pub use health::health;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let fragment_router = Router::new()
        .route(
            "/",
            get(todos::fragments::list).post(todos::fragments::create),
        )
        .route("/edit/{id}", get(todos::fragments::edit))
        .route(
            "/{id}",
            get(todos::fragments::get)
                .put(todos::fragments::update)
                .delete(todos::fragments::delete),
        );

    let api_router = Router::new()
        .route("/", get(todos::routes::list).post(todos::routes::create))
        .route(
            "/{id}",
            get(todos::routes::get)
                .put(todos::routes::update)
                .delete(todos::routes::delete),
        );

    Router::new()
        .route("/", get(todos::fragments::home))
        .route("/health", get(health))
        .nest("/todos", fragment_router)
        .nest("/api/todos", api_router)
}
