use diesel::prelude::*;
use diesel::PgConnection;

use super::TodoStore;
use crate::api::errors::TodoApiError;
use crate::models::todo_model::{NewTodo, Todo, TodoChanges, TodoRow};
use crate::models::Pool;

/// Todo store backed by the postgres `todos` table
pub struct PgTodoStore {
    pool: Pool,
}

impl PgTodoStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url`
    pub fn connect(database_url: &str) -> Result<Self, r2d2::Error> {
        let manager = diesel::r2d2::ConnectionManager::<PgConnection>::new(database_url);

        let pool: Pool = Pool::builder().build(manager)?;

        Ok(Self::new(pool))
    }
}

impl TodoStore for PgTodoStore {
    fn list(&self) -> Result<Vec<Todo>, TodoApiError> {
        use crate::schema::todos::dsl::*;
        let conn = &self.pool.get()?;

        let todos_list = todos.order(id.asc()).load::<Todo>(conn)?;

        Ok(todos_list)
    }

    fn get(&self, todo_id: i32) -> Result<Todo, TodoApiError> {
        use crate::schema::todos::dsl::*;
        let conn = &self.pool.get()?;

        todos
            .find(todo_id)
            .first::<Todo>(conn)
            .optional()?
            .ok_or_else(TodoApiError::todo_not_found)
    }

    fn create(&self, new_todo: NewTodo) -> Result<Todo, TodoApiError> {
        use crate::schema::todos::dsl::*;
        let conn = &self.pool.get()?;

        let row = TodoRow::from(new_todo);

        let inserted = diesel::insert_into(todos)
            .values(&row)
            .get_result::<Todo>(conn)?;

        log::debug!("Inserted todo {}", inserted.id);

        Ok(inserted)
    }

    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<Todo, TodoApiError> {
        use crate::schema::todos::dsl::*;

        // diesel refuses an UPDATE with an empty SET clause
        if changes.is_empty() {
            return self.get(todo_id);
        }

        let conn = &self.pool.get()?;

        diesel::update(todos.find(todo_id))
            .set(&changes)
            .get_result::<Todo>(conn)
            .optional()?
            .ok_or_else(TodoApiError::todo_not_found)
    }

    fn delete(&self, todo_id: i32) -> Result<(), TodoApiError> {
        use crate::schema::todos::dsl::*;
        let conn = &self.pool.get()?;

        let delete_count = diesel::delete(todos.find(todo_id)).execute(conn)?;

        if delete_count > 0 {
            Ok(())
        } else {
            Err(TodoApiError::todo_not_found())
        }
    }
}
