use std::fmt::Display;

#[derive(Debug)]
pub enum TodoError {
    /// Server answered with an error body
    ApiError { status: u16, message: String },
    HttpError(String),
}

pub type BaseError = Box<dyn std::error::Error>;

impl Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiError { status, message } => {
                write!(f, "{} ({})", message, status)
            }
            Self::HttpError(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

impl From<reqwest::Error> for TodoError {
    fn from(e: reqwest::Error) -> Self {
        TodoError::HttpError(e.to_string())
    }
}

impl std::error::Error for TodoError {}
