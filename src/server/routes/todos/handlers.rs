use super::extract::ValidJson;
use crate::error::TicklistError;
use crate::server::router::TicklistState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use ticklist_schema::{TodoCreateRequest, TodoResponse, TodoUpdateRequest};

type TodoId = Result<Path<i64>, PathRejection>;

/// POST /todos
pub(super) async fn create_todo(
    State(state): State<TicklistState>,
    ValidJson(draft): ValidJson<TodoCreateRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), TicklistError> {
    let todo = state.todos.create(draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos
pub(super) async fn list_todos(
    State(state): State<TicklistState>,
) -> Result<Json<Vec<TodoResponse>>, TicklistError> {
    Ok(Json(state.todos.list_all().await?))
}

/// GET /todos/{id}
pub(super) async fn get_todo(
    State(state): State<TicklistState>,
    id: TodoId,
) -> Result<Json<TodoResponse>, TicklistError> {
    let Path(id) = id?;
    Ok(Json(state.todos.get_by_id(id).await?))
}

/// PUT /todos/{id}
///
/// A syntactically valid but rule-breaking body is rejected with 400 before the id is
/// looked up, so an invalid update of a missing todo still reports validation errors.
pub(super) async fn update_todo(
    State(state): State<TicklistState>,
    id: TodoId,
    ValidJson(changes): ValidJson<TodoUpdateRequest>,
) -> Result<Json<TodoResponse>, TicklistError> {
    let Path(id) = id?;
    Ok(Json(state.todos.update(id, changes).await?))
}

/// DELETE /todos/{id}
pub(super) async fn delete_todo(
    State(state): State<TicklistState>,
    id: TodoId,
) -> Result<StatusCode, TicklistError> {
    let Path(id) = id?;
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
