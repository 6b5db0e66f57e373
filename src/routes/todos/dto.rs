use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{parse_date, NewTodo, TodoChanges, DEFAULT_STATUS};
use crate::error::AppError;

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub description: String,
    pub deadline_date: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    pub description: String,
    pub deadline_date: DateTime<Utc>,
    pub status: String,
}

/// Form-encoded body of the editable row; the deadline arrives as `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTodoForm {
    pub description: String,
    pub deadline_date: String,
    pub status: String,
}

impl From<CreateTodo> for NewTodo {
    fn from(body: CreateTodo) -> Self {
        Self {
            description: body.description,
            deadline_date: body.deadline_date,
            status: body.status,
        }
    }
}

impl From<UpdateTodo> for TodoChanges {
    fn from(body: UpdateTodo) -> Self {
        Self {
            description: body.description,
            deadline_date: body.deadline_date,
            status: body.status,
        }
    }
}

impl TryFrom<UpdateTodoForm> for TodoChanges {
    type Error = AppError;

    fn try_from(form: UpdateTodoForm) -> Result<Self, Self::Error> {
        Ok(Self {
            deadline_date: parse_date(&form.deadline_date)?,
            description: form.description,
            status: form.status,
        })
    }
}
