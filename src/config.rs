lazy_static::lazy_static! {
    /// Address the server binds to and the client talks to
    pub static ref API_URL: String = std::env::var("API_URL").unwrap_or_else(|_| String::from("localhost:5900"));

    pub static ref DATABASE_URL: Option<String> = std::env::var("DATABASE_URL").ok();
}
