use std::sync::Arc;

use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;

use crate::routes::todos::TodoDisplay;

const INDEX: &str = "index";
const TODO_ROW: &str = "todoRow";
const TODO_EDIT: &str = "todoEdit";

/// Handlebars registry for the page and row fragments, compiled once at startup.
#[derive(Clone)]
pub struct Templates {
    registry: Arc<Handlebars<'static>>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);

        registry.register_template_string(INDEX, include_str!("../templates/index.html"))?;
        // `index` also pulls this one in as a partial.
        registry.register_template_string(TODO_ROW, include_str!("../templates/todo_row.html"))?;
        registry.register_template_string(TODO_EDIT, include_str!("../templates/todo_edit.html"))?;

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn page(&self, todos: impl IntoIterator<Item = TodoDisplay>) -> Result<String, RenderError> {
        let todos: Vec<TodoDisplay> = todos.into_iter().collect();
        self.registry.render(INDEX, &json!({ "todos": todos }))
    }

    pub fn row(&self, todo: &TodoDisplay) -> Result<String, RenderError> {
        self.registry.render(TODO_ROW, todo)
    }

    pub fn rows(&self, todos: impl IntoIterator<Item = TodoDisplay>) -> Result<String, RenderError> {
        todos.into_iter().try_fold(String::new(), |mut html, todo| -> Result<String, RenderError> {
            html.push_str(&self.row(&todo)?);
            Ok(html)
        })
    }

    pub fn edit_row(&self, todo: &TodoDisplay) -> Result<String, RenderError> {
        self.registry.render(TODO_EDIT, todo)
    }
}
