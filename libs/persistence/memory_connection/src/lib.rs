use std::sync::Arc;

use tokio::sync::RwLock;

/// An append-only table held in process memory. Clones share the same rows,
/// so a table can be handed to several DAOs the way a pool is.
pub struct MemoryTable<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> MemoryTable<T>
where
    T: Clone + Send + Sync,
{
    pub fn new() -> Self { Self::default() }

    /// Appends a row and returns a copy of it.
    pub async fn insert(&self, row: T) -> T {
        self.rows.write().await.push(row.clone());
        row
    }

    pub async fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().find(|row| predicate(row)).cloned()
    }

    /// Rows matching `predicate`, in insertion order.
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn all(&self) -> Vec<T> { self.rows.read().await.clone() }
}
