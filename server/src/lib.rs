//! In-memory to-do CRUD service over HTTP.
//!
//! # Overview
//! `GET|POST /todos` and `GET|PUT|DELETE /todos/{id}`, each answering with a
//! `{status, data?, message?}` JSON envelope.
//!
//! # Design
//! - `TodoStore` owns the items; `TodoService` wraps it in a lock and is the
//!   router state, so each test can inject a fresh store.
//! - Id and body checks are extractors (`TodoId`, `ValidJson`) and reject
//!   before a handler runs.
//! - A missing item is `None` in the service and becomes a 404 in the
//!   handler. Service faults and handler panics become a 500 envelope.

use std::any::Any;
use std::future::Future;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod service;
pub mod store;
pub mod validate;

pub use config::Config;
pub use error::{ApiError, ServiceError};
pub use model::{NewTodo, Todo, TodoPatch};
pub use response::Envelope;
pub use service::TodoService;
pub use store::TodoStore;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(TodoService::default())
}

pub fn router(service: TodoService) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve a fresh app until `shutdown` resolves, then drain open requests.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal(message).into_response()
}
