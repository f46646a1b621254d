//! In-memory item store.
//!
//! Items live in a `Vec` so enumeration follows insertion order. Ids come
//! from a high-water mark rather than the current maximum, so an id freed by
//! a delete is never handed out again.

use crate::model::Todo;

#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<Todo>,
    last_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id. Returns `None` once the id space is used up.
    pub fn allocate_id(&mut self) -> Option<u64> {
        let next = self.last_id.checked_add(1)?;
        self.last_id = next;
        Some(next)
    }

    /// Append an item. An id already present is refused and the item handed back.
    pub fn push(&mut self, todo: Todo) -> Result<(), Todo> {
        if self.get(todo.id).is_some() {
            return Err(todo);
        }
        self.last_id = self.last_id.max(todo.id);
        self.items.push(todo);
        Ok(())
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.items.iter_mut().find(|todo| todo.id == id)
    }

    /// Remove one item, keeping the relative order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<Todo> {
        let index = self.items.iter().position(|todo| todo.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }
}
