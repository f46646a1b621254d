//! Wire and domain types for to-do items.

use serde::{Deserialize, Serialize};

/// A single to-do item as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub completed: bool,
}

/// Create payload. Both fields are required and type-checked.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTodo {
    pub task: String,
    pub completed: bool,
}

/// Update payload. Omitted or `null` fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub task: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Overwrite only the fields present in the patch. The id never changes.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(task) = self.task {
            todo.task = task;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}
