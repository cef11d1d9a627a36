//! Human-readable document numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A minted document number, e.g. `PO-2025-007`.
///
/// Immutable once issued; the sequence is 1-based and monotonically
/// increasing per prefix and calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNumber {
    pub prefix: String,
    pub year: i32,
    pub sequence: i64,
}

impl DocumentNumber {
    /// Successor rule: numbering restarts at 1 whenever the year (or prefix)
    /// changes, otherwise increments the last issued sequence.
    ///
    /// This is the pure rule only. Allocating against shared state must go
    /// through [`crate::numbering::SequenceStore`], which increments
    /// atomically; deriving the next number from a previously *read* value
    /// is not safe under concurrent issuance.
    pub fn next(prefix: &str, current_year: i32, last_issued: Option<&DocumentNumber>) -> Self {
        let sequence = match last_issued {
            Some(last) if last.prefix == prefix && last.year == current_year => last.sequence + 1,
            _ => 1,
        };
        DocumentNumber {
            prefix: prefix.to_string(),
            year: current_year,
            sequence,
        }
    }
}

impl fmt::Display for DocumentNumber {
    /// Sequence is zero-padded to at least three digits; wider sequences
    /// render in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:03}", self.prefix, self.year, self.sequence)
    }
}
