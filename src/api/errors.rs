use actix_web::{
    body::BoxBody,
    http::{
        self,
        header::{self, HeaderValue},
    },
    HttpResponse, ResponseError,
};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use serde_json::json;
use std::convert::From;

#[derive(Debug, Display, PartialEq)]
pub enum TodoApiError {
    #[display(fmt = "Internal Server Error")]
    InternalServerError,

    #[display(fmt = "BadRequest: {}", _0)]
    BadRequest(String),

    #[display(fmt = "Database Connection Error")]
    DatabaseConnectionError,

    #[display(fmt = "{} Not Found", _0)]
    NotFound(String),
}

impl TodoApiError {
    pub fn todo_not_found() -> Self {
        TodoApiError::NotFound(String::from("Todo"))
    }
}

impl ResponseError for TodoApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            TodoApiError::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            TodoApiError::BadRequest(_) => http::StatusCode::BAD_REQUEST,
            TodoApiError::NotFound(_) => http::StatusCode::NOT_FOUND,
            TodoApiError::DatabaseConnectionError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let mut res = HttpResponse::new(self.status_code());

        res.headers_mut().append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        res.set_body(BoxBody::new(json!({"error": self.to_string()}).to_string()))
    }
}

impl From<r2d2::Error> for TodoApiError {
    fn from(err: r2d2::Error) -> Self {
        log::error!("Connection pool error: {}", err);
        TodoApiError::DatabaseConnectionError
    }
}

impl From<DBError> for TodoApiError {
    fn from(error: DBError) -> Self {
        match error {
            DBError::NotFound => TodoApiError::todo_not_found(),
            DBError::DatabaseError(kind, info) => {
                if let DatabaseErrorKind::UniqueViolation = kind {
                    let message: String =
                        info.details().unwrap_or_else(|| info.message()).to_string();

                    return TodoApiError::BadRequest(message);
                }
                log::error!("Database error: {}", info.message());
                TodoApiError::InternalServerError
            }
            e => {
                log::error!("Database error: {}", e);
                TodoApiError::InternalServerError
            }
        }
    }
}

#[cfg(test)]
mod errors_test {
    use super::TodoApiError;
    use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
    use diesel::result::Error as DBError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TodoApiError::todo_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TodoApiError::BadRequest("nope".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TodoApiError::DatabaseConnectionError.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_diesel_not_found_maps_to_todo_not_found() {
        let err: TodoApiError = DBError::NotFound.into();

        assert_eq!(err, TodoApiError::todo_not_found());
        assert_eq!(err.to_string(), "Todo Not Found");
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let res = TodoApiError::todo_not_found().error_response();

        assert_eq!(
            res.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = to_bytes(res.into_body()).await.unwrap();

        assert_eq!(body, r#"{"error":"Todo Not Found"}"#);
    }
}
