//! HTML handlers for the progressive-enhancement front-end. Rows are swapped in
//! place by the browser, so every mutating route answers with the fragment that
//! replaces the row it came from.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Form,
};

use super::dto::UpdateTodoForm;
use super::{queries, NewTodo, TodoChanges, TodoDisplay};
use crate::error::AppError;
use crate::state::AppState;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tracing::info!("home page");
    let todos = queries::list_todos(&state.db).await?;
    let page = state.templates.page(todos.into_iter().map(TodoDisplay::from))?;
    Ok(Html(page))
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tracing::info!("list todo rows");
    let todos = queries::list_todos(&state.db).await?;
    let rows = state.templates.rows(todos.into_iter().map(TodoDisplay::from))?;
    Ok(Html(rows))
}

pub async fn create(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    tracing::info!("create blank todo row");
    let todo = queries::create_todo(&state.db, &NewTodo::blank()).await?;
    Ok(Html(state.templates.row(&TodoDisplay::from(todo))?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    tracing::info!(id, "get todo row");
    let todo = queries::get_todo(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Html(state.templates.row(&TodoDisplay::from(todo))?))
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    tracing::info!(id, "edit todo row");
    let todo = queries::get_todo(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Html(state.templates.edit_row(&TodoDisplay::from(todo))?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    form: Result<Form<UpdateTodoForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form?;
    tracing::info!(id, "update todo row");

    let changes = TodoChanges::try_from(form)?;
    let todo = queries::update_todo(&state.db, id, &changes)
        .await?
        .ok_or(AppError::NotFound(id))?;
    Ok(Html(state.templates.row(&TodoDisplay::from(todo))?))
}

/// Answers 200 with an empty body; fragment-swapping clients skip 204 responses
/// and would leave the deleted row on screen.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(id, "delete todo row");
    if !queries::delete_todo(&state.db, id).await? {
        return Err(AppError::NotFound(id));
    }

    Ok((StatusCode::OK, Html(String::new())))
}
