//! Domain models for document-core.

mod document;
mod line_item;
mod number;

pub use document::{DocumentKind, DocumentTotals, PricedDocument, TaxPolicy};
pub use line_item::{LineItemInput, PricedLineItem};
pub use number::DocumentNumber;

pub(crate) use line_item::RawCharges;
