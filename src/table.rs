use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::error;

use crate::shared::AppError;

/// Rows of one entity type keyed by a store-assigned id.
///
/// Ids start at 1 and are never reused, even after a row is removed.
#[derive(Debug)]
pub struct Table<T> {
    next_id: u64,
    rows: HashMap<u64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rows: HashMap::new(),
        }
    }

    /// Assigns the next id, builds the row from it and stores it
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Locks a table, reporting a poisoned lock as an internal error
pub fn lock<'a, T>(
    mutex: &'a Mutex<Table<T>>,
    table: &'static str,
) -> Result<MutexGuard<'a, Table<T>>, AppError> {
    mutex.lock().map_err(|_| {
        error!(table, "Table lock poisoned");
        AppError::Internal
    })
}
