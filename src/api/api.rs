use std::sync::Arc;

use actix_web::{self, middleware::Logger, web, App, HttpServer};

use crate::config::{API_URL, DATABASE_URL};
use crate::store::{MemoryTodoStore, PgTodoStore, TodoStore};

use super::{errors::TodoApiError, todos_handler};

/// Registers every api route
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _| TodoApiError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .route("/", web::get().to(todos_handler::hello))
        .service(
            web::scope("/api").service(
                web::scope("/todos")
                    .route("", web::get().to(todos_handler::get_todos))
                    .route("", web::post().to(todos_handler::create_todo))
                    .route("/{id}", web::get().to(todos_handler::get_todo))
                    .route("/{id}", web::put().to(todos_handler::update_todo))
                    .route("/{id}", web::delete().to(todos_handler::delete_todo))
                    .route(
                        "/{id}/complete",
                        web::put().to(todos_handler::mark_todo_as_complete),
                    )
                    .route(
                        "/{id}/incomplete",
                        web::put().to(todos_handler::mark_todo_as_incomplete),
                    ),
            ),
        );
}

/// Picks the postgres store when `DATABASE_URL` is set, memory otherwise
fn build_store() -> std::io::Result<Arc<dyn TodoStore>> {
    match DATABASE_URL.as_deref() {
        Some(database_url) => {
            let store = PgTodoStore::connect(database_url).map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("Failed to connect to PG database: {}", e),
                )
            })?;

            log::info!("Using postgres todo store");

            Ok(Arc::new(store))
        }
        None => {
            log::warn!("DATABASE_URL not set, todos are kept in memory only");

            Ok(Arc::new(MemoryTodoStore::new()))
        }
    }
}

#[actix_web::main]
pub async fn start_server() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "todo_cli=debug,actix_web=info,actix_server=info");
    }

    let _ = env_logger::try_init();

    let store = build_store()?;

    log::info!("Starting server on {}", API_URL.as_str());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(configure)
    })
    .workers(1) // Num of threads
    .bind(API_URL.as_str())?
    .run()
    .await
}
