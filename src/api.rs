//! HTTP API server.
//!
//! Exposes the greeting endpoint and the todo list as a small JSON API,
//! plus a health check.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{error, info};
use witaj_core::config::ServerConfig;
use witaj_core::error::WitajError;
use witaj_core::greeting::HelloService;
use witaj_store::Store;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    hello: HelloService<Store>,
    store: Store,
    uptime: Instant,
}

impl ApiState {
    pub fn new(store: Store) -> Self {
        Self {
            hello: HelloService::new(store.clone()),
            store,
            uptime: Instant::now(),
        }
    }
}

/// Query parameters for the greeting endpoint.
#[derive(Debug, Deserialize)]
struct HelloParams {
    name: Option<String>,
    lang: Option<String>,
}

/// Request body for creating a todo.
#[derive(Debug, Deserialize)]
struct AddTodoRequest {
    description: String,
}

/// Map a store error to an HTTP error tuple.
fn store_error(e: WitajError) -> (StatusCode, Json<Value>) {
    match e {
        WitajError::NotFound(msg) => (StatusCode::NOT_FOUND, Json(json!({"error": msg}))),
        other => {
            error!("store error: {other}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": other.to_string()})),
            )
        }
    }
}

/// `GET /hello?name=&lang=` — Resolve the greeting as a plain text body.
///
/// Both parameters are optional; malformed `lang` values are normal input
/// and resolve through the fallback chain rather than failing.
async fn hello(
    State(state): State<ApiState>,
    Query(params): Query<HelloParams>,
) -> Result<String, (StatusCode, Json<Value>)> {
    state
        .hello
        .prepare_greeting(params.name.as_deref(), params.lang.as_deref())
        .await
        .map_err(store_error)
}

/// `GET /api/health` — Health check with uptime.
async fn health(State(state): State<ApiState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.uptime.elapsed().as_secs(),
    }))
}

/// `GET /api/todos` — List all todos in store order.
async fn list_todos(
    State(state): State<ApiState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let todos = state.store.find_all_todos().await.map_err(store_error)?;
    Ok(Json(json!(todos)))
}

/// `POST /api/todos` — Create a todo.
async fn add_todo(
    State(state): State<ApiState>,
    body: Result<Json<AddTodoRequest>, axum::extract::rejection::JsonRejection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let Json(request) = body.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": format!("invalid request: {e}")})),
        )
    })?;

    if request.description.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "description must not be empty"})),
        ));
    }

    let todo = state
        .store
        .add_todo(&request.description)
        .await
        .map_err(store_error)?;

    Ok((StatusCode::CREATED, Json(json!(todo))))
}

/// `POST /api/todos/{id}/toggle` — Flip the done flag, 404 on unknown id.
async fn toggle_todo(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let todo = state.store.toggle_todo(id).await.map_err(store_error)?;
    Ok(Json(json!(todo)))
}

/// Build the axum router with shared state.
fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/api/health", get(health))
        .route("/api/todos", get(list_todos))
        .route("/api/todos", post(add_todo))
        .route("/api/todos/{id}/toggle", post(toggle_todo))
        .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
        .with_state(state)
}

/// Start the API server. Runs until the process is stopped.
pub async fn serve(config: &ServerConfig, state: ApiState) -> Result<(), WitajError> {
    let app = build_router(state);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API server listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
