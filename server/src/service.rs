//! Business operations over the shared store.
//!
//! `TodoService` is the only holder of the store. Every operation takes the
//! lock for its whole duration, so a mutation is never observed half-applied.
//! A missing id is reported as `None`, never as an error.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::ServiceError;
use crate::model::{NewTodo, Todo, TodoPatch};
use crate::store::TodoStore;

#[derive(Clone, Debug, Default)]
pub struct TodoService {
    store: Arc<RwLock<TodoStore>>,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn find_all(&self) -> Vec<Todo> {
        self.store.read().await.items().to_vec()
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Todo> {
        self.store.read().await.get(id).cloned()
    }

    pub async fn create(&self, input: NewTodo) -> Result<Todo, ServiceError> {
        let mut store = self.store.write().await;
        let id = store.allocate_id().ok_or(ServiceError::IdSpaceExhausted)?;
        let todo = Todo {
            id,
            task: input.task,
            completed: input.completed,
        };
        store
            .push(todo.clone())
            .map_err(|_| ServiceError::DuplicateId(id))?;
        info!(id, "todo created");
        Ok(todo)
    }

    pub async fn update(&self, id: u64, patch: TodoPatch) -> Option<Todo> {
        let mut store = self.store.write().await;
        let Some(todo) = store.get_mut(id) else {
            debug!(id, "update target missing");
            return None;
        };
        patch.apply(todo);
        info!(id, "todo updated");
        Some(todo.clone())
    }

    pub async fn delete(&self, id: u64) -> Option<Todo> {
        let removed = self.store.write().await.remove(id);
        if removed.is_some() {
            info!(id, "todo deleted");
        }
        removed
    }
}
