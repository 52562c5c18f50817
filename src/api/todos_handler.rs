use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::todo_model::{NewTodo, TodoChanges};
use crate::store::TodoStore;

/// Greeting served at the root
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello, World!" }))
}

/// Api handler for getting all todos
pub async fn get_todos(store: web::Data<dyn TodoStore>) -> Result<HttpResponse, actix_web::Error> {
    let list = web::block(move || store.list()).await??;

    Ok(HttpResponse::Ok().json(list))
}

/// Get a single todo by id
pub async fn get_todo(
    todo_id: web::Path<i32>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo = web::block(move || store.get(todo_id.into_inner())).await??;

    Ok(HttpResponse::Ok().json(todo))
}

/// Create a new todo
pub async fn create_todo(
    request_data: web::Json<NewTodo>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let inserted = web::block(move || store.create(request_data.into_inner())).await??;

    log::info!("Created todo {}", inserted.id);

    Ok(HttpResponse::Created().json(inserted))
}

/// Update a todo's description and/or completeness
pub async fn update_todo(
    todo_id: web::Path<i32>,
    request_data: web::Json<TodoChanges>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated =
        web::block(move || store.update(todo_id.into_inner(), request_data.into_inner())).await??;

    Ok(HttpResponse::Ok().json(updated))
}

/// Mark a todo as complete
pub async fn mark_todo_as_complete(
    todo_id: web::Path<i32>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated = web::block(move || store.set_completed(todo_id.into_inner(), true)).await??;

    Ok(HttpResponse::Ok().json(updated))
}

/// Mark a todo as incomplete
pub async fn mark_todo_as_incomplete(
    todo_id: web::Path<i32>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let updated = web::block(move || store.set_completed(todo_id.into_inner(), false)).await??;

    Ok(HttpResponse::Ok().json(updated))
}

/// Api to Delete a TODO
pub async fn delete_todo(
    todo_id: web::Path<i32>,
    store: web::Data<dyn TodoStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let todo_id = todo_id.into_inner();

    web::block(move || store.delete(todo_id)).await??;

    log::info!("Deleted todo {}", todo_id);

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};

    use crate::api::api::configure;
    use crate::models::todo_model::Todo;
    use crate::store::{MemoryTodoStore, TodoStore};

    fn memory_store() -> web::Data<dyn TodoStore> {
        let store: Arc<dyn TodoStore> = Arc::new(MemoryTodoStore::new());

        web::Data::from(store)
    }

    #[actix_web::test]
    async fn test_hello() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!({ "message": "Hello, World!" }));
    }

    #[actix_web::test]
    async fn test_create_and_get_todo() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({ "description": "Buy milk" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let created: Todo = test::read_body_json(resp).await;

        assert_eq!(created.id, 1);
        assert_eq!(created.description, "Buy milk");
        assert_eq!(created.completed, false);

        let req = test::TestRequest::get().uri("/api/todos/1").to_request();
        let fetched: Todo = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_list_todos() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        for description in ["one", "two"] {
            let req = test::TestRequest::post()
                .uri("/api/todos")
                .set_json(json!({ "description": description }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/todos").to_request();
        let list: Vec<Todo> = test::call_and_read_body_json(&app, req).await;

        let descriptions: Vec<&str> = list.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["one", "two"]);
    }

    #[actix_web::test]
    async fn test_empty_description_is_accepted() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({ "description": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_missing_description_is_bad_request() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({ "title": "Buy milk" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"].as_str().unwrap().starts_with("BadRequest"),
            true
        );
    }

    #[actix_web::test]
    async fn test_complete_and_update_todo() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({ "description": "Buy milk" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/todos/1/complete")
            .to_request();
        let completed: Todo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(completed.completed, true);

        let req = test::TestRequest::put()
            .uri("/api/todos/1")
            .set_json(json!({ "description": "Buy oat milk" }))
            .to_request();
        let updated: Todo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.description, "Buy oat milk");
        assert_eq!(updated.completed, true);

        let req = test::TestRequest::put()
            .uri("/api/todos/1/incomplete")
            .to_request();
        let reopened: Todo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reopened.completed, false);
        assert_eq!(reopened.created_at, completed.created_at);
    }

    #[actix_web::test]
    async fn test_delete_todo() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({ "description": "Buy milk" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/todos/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/todos/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unknown_todo_is_not_found() {
        let app = test::init_service(App::new().app_data(memory_store()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/todos/99").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Todo Not Found" }));
    }
}
