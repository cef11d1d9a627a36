//! Document number allocation.
//!
//! The successor rule itself lives on [`DocumentNumber`]; this module owns
//! allocation against shared state. Reading the last issued number and
//! incrementing it client-side mints duplicates under concurrent creation,
//! so every allocation goes through a [`SequenceStore`] whose increment is
//! atomic. A document must never be persisted without a minted number.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use tracing::{info, instrument};

use crate::error::EngineError;
use crate::models::DocumentNumber;

/// Atomically incrementing counter, keyed by prefix and calendar year.
///
/// `next_sequence` must return 1 on first use of a key and each subsequent
/// call must observe every prior one: N concurrent calls yield N distinct
/// sequence values. Yearly reset falls out of the keying.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    async fn next_sequence(&self, prefix: &str, year: i32) -> Result<i64, EngineError>;
}

/// Issues document numbers from a [`SequenceStore`].
pub struct NumberAllocator<S> {
    store: S,
}

impl<S: SequenceStore> NumberAllocator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Mint the next number for `prefix` in `year`.
    #[instrument(skip(self))]
    pub async fn issue(&self, prefix: &str, year: i32) -> Result<DocumentNumber, EngineError> {
        if prefix.trim().is_empty() {
            return Err(EngineError::validation("prefix", "must not be empty"));
        }

        let sequence = self.store.next_sequence(prefix, year).await?;
        let number = DocumentNumber {
            prefix: prefix.to_string(),
            year,
            sequence,
        };

        info!(number = %number, "Document number issued");

        Ok(number)
    }

    /// Mint the next number for `prefix` in the current UTC calendar year.
    pub async fn issue_current(&self, prefix: &str) -> Result<DocumentNumber, EngineError> {
        self.issue(prefix, Utc::now().year()).await
    }
}
