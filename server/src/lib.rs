//! HTTP router for the todo service.
//!
//! # Overview
//! Maps four routes onto the four store operations and serializes results as
//! JSON. Success and error bodies follow a fixed contract: the list endpoint
//! returns a JSON array, create returns a plain-text confirmation, update and
//! delete return 204 with an empty body, and every failure is a plain-text
//! message with a 400 or 500 status.
//!
//! # Design
//! - The store is injected into `app()` and reaches handlers through axum
//!   `State`; tests hand in an isolated in-memory store per case.
//! - Request bodies are decoded with `serde_json` from the raw string rather
//!   than the `Json` extractor, so malformed JSON maps to a plain 400 instead
//!   of the extractor's rejection statuses.
//! - Missing body fields decode to empty strings and unknown fields are
//!   ignored; in particular `completed` on create is ignored and forced to
//!   `"incomplete"` by the store.
//! - Update and delete targeting an unknown id still answer 204: the store
//!   reports zero affected rows as success and the router does not add a 404.

pub mod config;
pub mod error;

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use todo_store::{TodoItem, TodoStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Body accepted by `POST /todos`. A `completed` field in the payload is
/// ignored; a missing `title` decodes to the empty string and is stored as-is.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
}

/// Body accepted by `PATCH /todos/{id}`. Both fields overwrite the row
/// wholesale; missing fields decode to empty strings.
#[derive(Debug, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: String,
}

/// Builds the router with the given store and CORS origin.
pub fn app(store: TodoStore, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .layer(TraceLayer::new_for_http())
        .layer(cors(allowed_origin))
        .with_state(store)
}

/// Serves the router on `listener` until the process is stopped.
pub async fn run(
    listener: TcpListener,
    store: TodoStore,
    allowed_origin: HeaderValue,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store, allowed_origin)).await
}

/// Cross-origin policy for the configured browser origin: all service
/// methods, the usual request headers, `Link` exposed, preflight cached for
/// five minutes, no credentials.
fn cors(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

async fn list_todos(State(store): State<TodoStore>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let todos = store.list().map_err(|source| ApiError::Internal {
        message: "Failed to query todos",
        source,
    })?;
    Ok(Json(todos))
}

async fn create_todo(
    State(store): State<TodoStore>,
    body: String,
) -> Result<(StatusCode, String), ApiError> {
    let input: CreateTodo =
        serde_json::from_str(&body).map_err(|_| ApiError::BadRequest("Invalid request body"))?;

    store.create(&input.title).map_err(|source| ApiError::Internal {
        message: "Failed to insert todo",
        source,
    })?;

    Ok((StatusCode::CREATED, format!("Todo created: {}\n", input.title)))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let input: UpdateTodo =
        serde_json::from_str(&body).map_err(|_| ApiError::BadRequest("Invalid request body"))?;

    store
        .update(&id, &input.title, &input.completed)
        .map_err(|source| ApiError::Internal {
            message: "Failed to update todo",
            source,
        })?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo(
    State(store): State<TodoStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    store.delete(&id).map_err(|source| ApiError::Internal {
        message: "Failed to delete todo",
        source,
    })?;

    Ok(StatusCode::NO_CONTENT)
}
