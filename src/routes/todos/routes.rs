use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{CreateTodo, UpdateTodo};
use super::{queries, NewTodo, TodoChanges};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("list todos");
    let todos = queries::list_todos(&state.db).await?;
    Ok(Json(todos))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    tracing::info!("create todo");

    let todo = queries::create_todo(&state.db, &NewTodo::from(body)).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "get todo");
    let todo = queries::get_todo(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    tracing::info!(id, "update todo");

    let todo = queries::update_todo(&state.db, id, &TodoChanges::from(body))
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "delete todo");
    if !queries::delete_todo(&state.db, id).await? {
        return Err(AppError::NotFound(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
