pub mod dto;
pub mod fragments;
pub mod queries;
pub mod routes;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_STATUS: &str = "Waiting";

/// Date format used by `<input type="date">` and every rendered date.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

// MODELS

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub created_date: DateTime<Utc>,
    pub deadline_date: DateTime<Utc>,
    pub status: String,
}

/// A todo with its dates formatted for templates and form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDisplay {
    pub id: i64,
    pub description: String,
    pub created_date: String,
    pub deadline_date: String,
    pub status: String,
}

/// Fields a client may set on a new todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub description: String,
    pub deadline_date: DateTime<Utc>,
    pub status: String,
}

/// Replacement values for the mutable fields of a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub description: String,
    pub deadline_date: DateTime<Utc>,
    pub status: String,
}

impl NewTodo {
    /// The empty row the fragment front-end inserts before the user edits it.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            deadline_date: Utc::now(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

// CONVERSIONS

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` string as midnight UTC of that day.
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|e| AppError::BadRequest(format!("invalid date {raw:?}: {e}")))?;

    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

impl From<Todo> for TodoDisplay {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            created_date: format_date(&todo.created_date),
            deadline_date: format_date(&todo.deadline_date),
            description: todo.description,
            status: todo.status,
        }
    }
}

impl TryFrom<TodoDisplay> for Todo {
    type Error = AppError;

    fn try_from(display: TodoDisplay) -> Result<Self, Self::Error> {
        Ok(Self {
            id: display.id,
            created_date: parse_date(&display.created_date)?,
            deadline_date: parse_date(&display.deadline_date)?,
            description: display.description,
            status: display.status,
        })
    }
}
