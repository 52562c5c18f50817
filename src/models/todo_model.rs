use crate::schema::*;
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A single todo entry as stored and displayed.
///
/// `id` and `created_at` are assigned by whatever store owns the todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a todo, before it has an id or a timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub description: String,
}

/// Partial update of a todo. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, AsChangeset)]
#[table_name = "todos"]
pub struct TodoChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Row inserted into `todos`; the id comes from the serial column
#[derive(Debug, Insertable)]
#[table_name = "todos"]
pub struct TodoRow {
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    pub fn new<T: Into<String>>(description: T) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Todo {
    /// Builds a fresh, not yet completed todo out of a creation payload
    pub fn from_new_todo(new_todo: NewTodo, id: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            description: new_todo.description,
            completed: false,
            created_at,
        }
    }

    /// Applies the fields present in `changes`
    pub fn apply(&mut self, changes: TodoChanges) {
        if let Some(description) = changes.description {
            self.description = description;
        }

        if let Some(completed) = changes.completed {
            self.completed = completed;
        }
    }
}

impl TodoChanges {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none()
    }
}

impl From<NewTodo> for TodoRow {
    fn from(new_todo: NewTodo) -> Self {
        Self {
            description: new_todo.description,
            completed: false,
            created_at: Utc::now(),
        }
    }
}
