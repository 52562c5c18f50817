use crate::models::todo_model::Todo;

/// Renders a single todo as `[x] 3  Buy milk  (2026-10-17 09:30)`
pub fn render_todo(todo: &Todo) -> String {
    let mark = if todo.completed { "x" } else { " " };

    format!(
        "[{}] {}  {}  ({})",
        mark,
        todo.id,
        todo.description,
        todo.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// Renders the list with open todos first, then the completed ones
pub fn render_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return String::from("No todos yet");
    }

    let (undone, done): (Vec<&Todo>, Vec<&Todo>) = todos.iter().partition(|todo| !todo.completed);

    undone
        .into_iter()
        .chain(done)
        .map(render_todo)
        .collect::<Vec<String>>()
        .join("\n")
}
