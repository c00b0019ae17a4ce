//! Table - mutex-guarded ordered map with server-assigned integer keys.

use std::collections::BTreeMap;

use tokio::sync::{Mutex, MutexGuard};

/// One entity store: a `BTreeMap` keyed by server-assigned id behind a
/// single async mutex.
///
/// The ordered map gives every listing ascending-id iteration, and makes
/// the next id a `last_key_value` lookup. Id allocation and insertion
/// always happen inside one critical section; splitting them across two
/// lock acquisitions would let two concurrent creations claim the same id.
pub struct Table<T> {
    rows: Mutex<BTreeMap<i64, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Table {
            rows: Mutex::new(BTreeMap::new()),
        }
    }

    /// Lock the underlying map for a multi-step critical section.
    ///
    /// Used by operations that have to pair a scan with a mutation under
    /// one acquisition (username uniqueness, lookup-then-remove).
    pub(crate) async fn rows(&self) -> MutexGuard<'_, BTreeMap<i64, T>> {
        self.rows.lock().await
    }

    /// Next id for a map: `0` when empty, else highest key + 1.
    ///
    /// Deleting the highest-id record and inserting again reuses that id;
    /// the scheme is a simple max-scan, not a monotonic counter.
    pub(crate) fn next_id(rows: &BTreeMap<i64, T>) -> i64 {
        rows.last_key_value().map(|(id, _)| id + 1).unwrap_or(0)
    }

    /// Allocate the next id and insert `make(id)` in one critical section.
    ///
    /// Returns the assigned id.
    pub async fn insert(&self, make: impl FnOnce(i64) -> T) -> i64 {
        let mut rows = self.rows.lock().await;
        let id = Self::next_id(&rows);
        rows.insert(id, make(id));
        id
    }

    /// Replace the row at `id` only if it is present.
    ///
    /// Returns whether a row was replaced. Never inserts a fresh key, so
    /// a full-replace update cannot resurrect a deleted record.
    pub async fn update(&self, id: i64, row: T) -> bool {
        let mut rows = self.rows.lock().await;
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: i64) -> Option<T> {
        self.rows.lock().await.remove(&id)
    }
}

impl<T: Clone> Table<T> {
    pub async fn get(&self, id: i64) -> Option<T> {
        self.rows.lock().await.get(&id).cloned()
    }

    /// All rows in ascending-id order.
    pub async fn all(&self) -> Vec<T> {
        self.rows.lock().await.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_zero_and_count_up() {
        let table: Table<&str> = Table::new();
        assert_eq!(table.insert(|_| "a").await, 0);
        assert_eq!(table.insert(|_| "b").await, 1);
        assert_eq!(table.insert(|_| "c").await, 2);
    }

    #[tokio::test]
    async fn removing_the_top_id_frees_it_for_reuse() {
        let table: Table<&str> = Table::new();
        table.insert(|_| "a").await;
        let top = table.insert(|_| "b").await;
        assert_eq!(table.remove(top).await, Some("b"));
        assert_eq!(table.insert(|_| "c").await, top);
    }

    #[tokio::test]
    async fn removing_a_lower_id_does_not_disturb_allocation() {
        let table: Table<&str> = Table::new();
        let low = table.insert(|_| "a").await;
        table.insert(|_| "b").await;
        table.remove(low).await;
        assert_eq!(table.insert(|_| "c").await, 2);
    }

    #[tokio::test]
    async fn update_refuses_absent_keys() {
        let table: Table<&str> = Table::new();
        let id = table.insert(|_| "a").await;
        assert!(table.update(id, "b").await);
        assert!(!table.update(id + 1, "c").await);
        assert_eq!(table.get(id).await, Some("b"));
        assert_eq!(table.get(id + 1).await, None);
    }

    #[tokio::test]
    async fn all_is_ordered_by_id() {
        let table: Table<i64> = Table::new();
        for n in 0..5 {
            table.insert(|_| n * 10).await;
        }
        assert_eq!(table.all().await, vec![0, 10, 20, 30, 40]);
    }
}
