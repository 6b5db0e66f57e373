use sqlx::SqlitePool;

use crate::render::Templates;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub templates: Templates,
}
