//! Number allocation tests for document-core.

use async_trait::async_trait;
use document_core::{
    DocumentKind, DocumentNumber, EngineError, InMemorySequenceStore, NumberAllocator,
    PgSequenceStore, SequenceStore,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Store that always fails, standing in for an unavailable backend.
struct UnavailableStore;

#[async_trait]
impl SequenceStore for UnavailableStore {
    async fn next_sequence(&self, _prefix: &str, _year: i32) -> Result<i64, EngineError> {
        Err(EngineError::NumberGeneration(anyhow::anyhow!(
            "counter backend unavailable"
        )))
    }
}

#[tokio::test]
async fn issues_sequential_numbers_per_prefix_and_year() {
    let allocator = NumberAllocator::new(InMemorySequenceStore::new());

    let first = allocator.issue("PO", 2025).await.unwrap();
    let second = allocator.issue("PO", 2025).await.unwrap();
    let other_year = allocator.issue("PO", 2026).await.unwrap();
    let other_prefix = allocator.issue("QT", 2025).await.unwrap();

    assert_eq!(first.to_string(), "PO-2025-001");
    assert_eq!(second.to_string(), "PO-2025-002");
    assert_eq!(other_year.to_string(), "PO-2026-001");
    assert_eq!(other_prefix.to_string(), "QT-2025-001");
}

#[tokio::test]
async fn kind_prefixes_drive_issuance() {
    let allocator = NumberAllocator::new(InMemorySequenceStore::new());

    let number = allocator
        .issue(DocumentKind::PurchaseOrder.prefix(), 2025)
        .await
        .unwrap();
    assert_eq!(number.prefix, "PO");

    let number = allocator
        .issue(DocumentKind::Quote.prefix(), 2025)
        .await
        .unwrap();
    assert_eq!(number.prefix, "QT");
}

#[tokio::test]
async fn concurrent_issuance_yields_distinct_sequences() {
    let allocator = Arc::new(NumberAllocator::new(InMemorySequenceStore::new()));
    let issuers = 50;

    let mut handles = Vec::with_capacity(issuers);
    for _ in 0..issuers {
        let allocator = Arc::clone(&allocator);
        handles.push(tokio::spawn(
            async move { allocator.issue("PO", 2025).await },
        ));
    }

    let mut sequences = HashSet::new();
    for handle in handles {
        let number = handle.await.unwrap().unwrap();
        assert!(
            sequences.insert(number.sequence),
            "duplicate sequence {} issued",
            number.sequence
        );
    }

    assert_eq!(sequences.len(), issuers);
    assert_eq!(*sequences.iter().max().unwrap(), issuers as i64);
}

#[tokio::test]
async fn store_failure_surfaces_as_number_generation_error() {
    let allocator = NumberAllocator::new(UnavailableStore);

    let err = allocator.issue("PO", 2025).await.unwrap_err();
    assert!(matches!(err, EngineError::NumberGeneration(_)));
}

#[tokio::test]
async fn empty_prefix_is_rejected_before_touching_the_store() {
    let allocator = NumberAllocator::new(UnavailableStore);

    let err = allocator.issue("  ", 2025).await.unwrap_err();
    assert_eq!(err.field(), Some("prefix"));
}

#[test]
fn successor_rule_matches_allocation_semantics() {
    let last = DocumentNumber {
        prefix: "PO".to_string(),
        year: 2025,
        sequence: 47,
    };

    let same_year = DocumentNumber::next("PO", 2025, Some(&last));
    assert_eq!(same_year.to_string(), "PO-2025-048");

    let next_year = DocumentNumber::next("PO", 2026, Some(&last));
    assert_eq!(next_year.to_string(), "PO-2026-001");

    let fresh = DocumentNumber::next("PO", 2025, None);
    assert_eq!(fresh.to_string(), "PO-2025-001");
}

/// Needs a running Postgres with `DATABASE_URL` set; run with
/// `cargo test -- --ignored`.
#[tokio::test]
#[ignore = "requires a running postgres instance"]
async fn postgres_store_issues_distinct_sequences() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = PgSequenceStore::connect(&database_url, 5, 1)
        .await
        .expect("Failed to connect");
    store.run_migrations().await.expect("Migration failed");

    // Unique prefix per run so reruns start from a fresh counter row.
    let prefix = format!("T{}", std::process::id());
    let allocator = Arc::new(NumberAllocator::new(store));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let allocator = Arc::clone(&allocator);
        let prefix = prefix.clone();
        handles.push(tokio::spawn(async move {
            allocator.issue(&prefix, 2025).await
        }));
    }

    let mut sequences = HashSet::new();
    for handle in handles {
        let number = handle.await.unwrap().unwrap();
        assert!(sequences.insert(number.sequence));
    }
    assert_eq!(sequences.len(), 20);
}
