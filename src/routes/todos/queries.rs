use chrono::Utc;
use sqlx::{Result, SqlitePool};

use super::{NewTodo, Todo, TodoChanges};

pub async fn list_todos(pool: &SqlitePool) -> Result<Vec<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, description, created_date, deadline_date, status
        FROM todos
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rec)
}

pub async fn get_todo(pool: &SqlitePool, id: i64) -> Result<Option<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, description, created_date, deadline_date, status
        FROM todos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rec)
}

pub async fn create_todo(pool: &SqlitePool, todo: &NewTodo) -> Result<Todo> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (description, created_date, deadline_date, status)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, description, created_date, deadline_date, status
        "#,
    )
    .bind(&todo.description)
    .bind(Utc::now())
    .bind(todo.deadline_date)
    .bind(&todo.status)
    .fetch_one(pool)
    .await?;

    Ok(rec)
}

/// Returns `None` when no row has the given id.
pub async fn update_todo(pool: &SqlitePool, id: i64, changes: &TodoChanges) -> Result<Option<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET
            description = ?1,
            deadline_date = ?2,
            status = ?3
        WHERE id = ?4
        RETURNING id, description, created_date, deadline_date, status
        "#,
    )
    .bind(&changes.description)
    .bind(changes.deadline_date)
    .bind(&changes.status)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rec)
}

/// Returns whether a row was removed.
pub async fn delete_todo(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
