//! document-core: line-item pricing, document totals, and sequential
//! numbering for quotes and purchase orders.
//!
//! The crate is a library consumed by a surrounding document-management
//! service. It owns three concerns: pricing a single line item, aggregating
//! priced lines into document totals, and issuing human-readable document
//! numbers (`PO-2025-007`) from an atomically incremented counter.

pub mod config;
pub mod error;
pub mod models;
pub mod numbering;
pub mod pricing;

pub use config::Settings;
pub use error::EngineError;
pub use models::{
    DocumentKind, DocumentNumber, DocumentTotals, LineItemInput, PricedDocument, PricedLineItem,
    TaxPolicy,
};
pub use numbering::{
    memory::InMemorySequenceStore, postgres::PgSequenceStore, NumberAllocator, SequenceStore,
};
