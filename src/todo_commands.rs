use inquire::Text;
use reqwest::{
    blocking::{Client, Response},
    header::CONTENT_TYPE,
    Method,
};
use serde::de::DeserializeOwned;

use crate::{
    errors::{BaseError, TodoError},
    models::todo_model::{NewTodo, Todo, TodoChanges},
    todo_list_renderer::{render_todo, render_todo_list},
    utils::make_api_url,
};

/// Turns a non-success response into `TodoError::ApiError`,
/// using the `error` field of the body when there is one
fn handle_response(response: Response) -> Result<Response, TodoError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|body| body.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());

    Err(TodoError::ApiError {
        status: status.as_u16(),
        message,
    })
}

fn send(
    method: Method,
    resource: &str,
    data: Option<serde_json::Value>,
) -> Result<Response, TodoError> {
    let mut request = Client::new()
        .request(method, make_api_url(resource))
        .header(CONTENT_TYPE, "application/json");

    if let Some(data) = data {
        request = request.json(&data);
    }

    handle_response(request.send()?)
}

fn send_for<T: DeserializeOwned>(
    method: Method,
    resource: &str,
    data: Option<serde_json::Value>,
) -> Result<T, TodoError> {
    let response = send(method, resource, data)?;

    Ok(response.json::<T>()?)
}

/// Create a todo, prompting for the description when none is given
pub fn create_new_todo(description: Option<String>) -> Result<(), BaseError> {
    let description = match description {
        Some(description) => description,
        None => Text::new("Description")
            .with_help_message("Description for your new todo")
            .prompt()?,
    };

    let body = serde_json::to_value(NewTodo::new(description))?;

    let todo: Todo = send_for(Method::POST, "todos", Some(body))?;

    println!("Created {}", render_todo(&todo));

    Ok(())
}

/// List all the todos
pub fn list_todos() -> Result<(), BaseError> {
    let list: Vec<Todo> = send_for(Method::GET, "todos", None)?;

    println!("{}", render_todo_list(&list));

    Ok(())
}

pub fn show_todo(todo_id: i32) -> Result<(), BaseError> {
    let todo: Todo = send_for(Method::GET, format!("todos/{}", todo_id).as_str(), None)?;

    println!("{}", render_todo(&todo));

    Ok(())
}

/// Request to complete or reopen a todo
pub fn set_todo_completed(todo_id: i32, is_complete: bool) -> Result<(), BaseError> {
    let action = if is_complete { "complete" } else { "incomplete" };

    let todo: Todo = send_for(
        Method::PUT,
        format!("todos/{}/{}", todo_id, action).as_str(),
        None,
    )?;

    println!("{}", render_todo(&todo));

    Ok(())
}

pub fn edit_todo(todo_id: i32, description: String) -> Result<(), BaseError> {
    let changes = TodoChanges {
        description: Some(description),
        completed: None,
    };

    let todo: Todo = send_for(
        Method::PUT,
        format!("todos/{}", todo_id).as_str(),
        Some(serde_json::to_value(changes)?),
    )?;

    println!("{}", render_todo(&todo));

    Ok(())
}

/// Request to delete a todo
pub fn delete_todo(todo_id: i32) -> Result<(), BaseError> {
    send(Method::DELETE, format!("todos/{}", todo_id).as_str(), None)?;

    println!("Deleted todo {}", todo_id);

    Ok(())
}
