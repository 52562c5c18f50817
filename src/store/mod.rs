pub mod memory_store;
pub mod pg_store;

use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, Todo, TodoChanges};

pub use memory_store::MemoryTodoStore;
pub use pg_store::PgTodoStore;

/// Owner of the todo collection.
///
/// Stores assign `id` and `created_at` on creation and always start
/// todos as incomplete. Calls are blocking; the api runs them
/// through `web::block`.
pub trait TodoStore: Send + Sync {
    /// All todos, ordered by id
    fn list(&self) -> Result<Vec<Todo>, TodoApiError>;

    fn get(&self, todo_id: i32) -> Result<Todo, TodoApiError>;

    fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoApiError>;

    /// Applies `changes` and returns the updated todo
    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<Todo, TodoApiError>;

    fn delete(&self, todo_id: i32) -> Result<(), TodoApiError>;

    /// Complete or uncomplete a todo
    fn set_completed(&self, todo_id: i32, is_complete: bool) -> Result<Todo, TodoApiError> {
        self.update(todo_id, TodoChanges::completed(is_complete))
    }
}
