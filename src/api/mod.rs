pub mod api;
pub(crate) mod errors;
mod todos_handler;
