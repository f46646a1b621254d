use axum::{
    extract::State,
    http::{Method, Uri},
    Json,
};
use tracing::debug;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::response::Envelope;
use crate::service::TodoService;
use crate::validate::{TodoId, ValidJson};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

pub async fn list_todos(State(service): State<TodoService>) -> ApiResult<Vec<Todo>> {
    let todos = service.find_all().await;
    debug!(count = todos.len(), "listed todos");
    Ok(Json(Envelope::ok(todos)))
}

pub async fn get_todo(
    State(service): State<TodoService>,
    TodoId(id): TodoId,
) -> ApiResult<Todo> {
    debug!(id, "get todo");
    let todo = service
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found(id))?;
    Ok(Json(Envelope::ok(todo)))
}

pub async fn create_todo(
    State(service): State<TodoService>,
    ValidJson(input): ValidJson<NewTodo>,
) -> ApiResult<Todo> {
    let todo = service.create(input).await?;
    Ok(Json(Envelope::ok(todo)))
}

pub async fn update_todo(
    State(service): State<TodoService>,
    TodoId(id): TodoId,
    ValidJson(patch): ValidJson<TodoPatch>,
) -> ApiResult<Todo> {
    let todo = service
        .update(id, patch)
        .await
        .ok_or_else(|| ApiError::not_found(id))?;
    Ok(Json(
        Envelope::ok(todo).with_message(format!("Todo(#{id}) was updated successfully.")),
    ))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    TodoId(id): TodoId,
) -> ApiResult<Todo> {
    let todo = service
        .delete(id)
        .await
        .ok_or_else(|| ApiError::not_found(id))?;
    Ok(Json(
        Envelope::ok(todo).with_message(format!("Todo(#{id}) was deleted successfully.")),
    ))
}

pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}

pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
