use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
}

#[derive(Deserialize)]
pub struct TitleInput {
    pub title: String,
}

/// Todos in insertion order; list responses preserve it.
pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    app_with(Db::default())
}

/// Router over an existing store, so tests can seed or inspect it.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn checked_title(title: String) -> Result<String, StatusCode> {
    if title.trim().is_empty() {
        tracing::debug!("rejecting blank title");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    Ok(title)
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TitleInput>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let todo = Todo {
        id: Uuid::new_v4().to_string(),
        title: checked_title(input.title)?,
    };
    db.write().await.push(todo.clone());
    tracing::info!(id = %todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Result<Json<Todo>, StatusCode> {
    let title = checked_title(input.title)?;
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    todo.title = title;
    tracing::info!(%id, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut todos = db.write().await;
    let before = todos.len();
    todos.retain(|t| t.id != id);
    if todos.len() == before {
        return StatusCode::NOT_FOUND;
    }
    tracing::info!(%id, "deleted todo");
    StatusCode::NO_CONTENT
}
