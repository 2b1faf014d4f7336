//! Environment-based configuration.
//!
//! Three knobs, all optional, all read once at startup:
//! - `PORT` — TCP port to listen on (default `5000`).
//! - `TODOS_DB` — path of the SQLite database file (default `todos.db`).
//! - `ALLOWED_ORIGIN` — browser origin permitted by CORS
//!   (default `http://localhost:5173`).

use std::env;

/// Runtime configuration assembled from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub db_path: String,
    pub allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()),
            db_path: env::var("TODOS_DB").unwrap_or_else(|_| "todos.db".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}
