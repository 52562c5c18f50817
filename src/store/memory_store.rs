use std::sync::{Mutex, MutexGuard};

use super::TodoStore;
use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, Todo, TodoChanges};

struct Inner {
    next_id: i32,
    todos: Vec<Todo>,
}

/// Keeps todos in process memory. Used when no `DATABASE_URL` is configured
/// and by the api tests.
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                todos: vec![],
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, TodoApiError> {
        self.inner.lock().map_err(|_| {
            log::error!("Memory store lock poisoned");
            TodoApiError::InternalServerError
        })
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for MemoryTodoStore {
    fn list(&self) -> Result<Vec<Todo>, TodoApiError> {
        // ids are handed out in increasing order, so insertion order is id order
        Ok(self.lock()?.todos.clone())
    }

    fn get(&self, todo_id: i32) -> Result<Todo, TodoApiError> {
        self.lock()?
            .todos
            .iter()
            .find(|todo| todo.id == todo_id)
            .cloned()
            .ok_or_else(TodoApiError::todo_not_found)
    }

    fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoApiError> {
        let mut inner = self.lock()?;

        let todo = Todo::from_new_todo(new_todo, inner.next_id, chrono::Utc::now());

        inner.next_id += 1;
        inner.todos.push(todo.clone());

        Ok(todo)
    }

    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<Todo, TodoApiError> {
        let mut inner = self.lock()?;

        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or_else(TodoApiError::todo_not_found)?;

        todo.apply(changes);

        Ok(todo.clone())
    }

    fn delete(&self, todo_id: i32) -> Result<(), TodoApiError> {
        let mut inner = self.lock()?;

        let before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != todo_id);

        if inner.todos.len() == before {
            return Err(TodoApiError::todo_not_found());
        }

        Ok(())
    }
}
