use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthData {
    status: u16,
    database: &'static str,
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthData>) {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::error!(error = %e, "Health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let health_data = HealthData { status: status.as_u16(), database };
    (status, Json(health_data))
}
