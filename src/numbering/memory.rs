//! In-process sequence store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::EngineError;
use crate::numbering::SequenceStore;

/// Sequence store backed by a mutex-guarded map.
///
/// The lock covers the whole read-increment-write step, so concurrent
/// callers within one process cannot observe the same value. For counters
/// shared across processes use
/// [`PgSequenceStore`](crate::numbering::postgres::PgSequenceStore).
#[derive(Default)]
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<(String, i32), i64>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SequenceStore for InMemorySequenceStore {
    async fn next_sequence(&self, prefix: &str, year: i32) -> Result<i64, EngineError> {
        let mut counters = self.counters.lock().await;
        let entry = counters.entry((prefix.to_string(), year)).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counts_up_from_one() {
        let store = InMemorySequenceStore::new();
        assert_eq!(store.next_sequence("PO", 2025).await.unwrap(), 1);
        assert_eq!(store.next_sequence("PO", 2025).await.unwrap(), 2);
        assert_eq!(store.next_sequence("PO", 2025).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = InMemorySequenceStore::new();
        store.next_sequence("PO", 2025).await.unwrap();
        store.next_sequence("PO", 2025).await.unwrap();

        // A new year and a different prefix both start over at 1.
        assert_eq!(store.next_sequence("PO", 2026).await.unwrap(), 1);
        assert_eq!(store.next_sequence("QT", 2025).await.unwrap(), 1);
        assert_eq!(store.next_sequence("PO", 2025).await.unwrap(), 3);
    }
}
