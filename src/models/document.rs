//! Document-level models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::{LineItemInput, PricedLineItem};

/// Kind of priced document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PurchaseOrder,
    Quote,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::PurchaseOrder => "purchase_order",
            DocumentKind::Quote => "quote",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "quote" => DocumentKind::Quote,
            _ => DocumentKind::PurchaseOrder,
        }
    }

    /// Prefix used when minting document numbers for this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::PurchaseOrder => "PO",
            DocumentKind::Quote => "QT",
        }
    }
}

/// How the tax rate for a line is determined.
///
/// Purchase orders carry one fixed rate for every line; quotes accept a
/// free-entry rate per line (missing means untaxed). The two behaviors are
/// deliberate per-kind policy, kept as named configuration instead of a
/// literal buried in the math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaxPolicy {
    Fixed(Decimal),
    PerLine,
}

impl TaxPolicy {
    /// Effective tax rate percent for one line under this policy.
    pub fn rate_for(&self, input: &LineItemInput) -> Decimal {
        match self {
            TaxPolicy::Fixed(rate) => *rate,
            TaxPolicy::PerLine => input.tax_rate_percent.unwrap_or(Decimal::ZERO),
        }
    }
}

/// Aggregated totals over a document's line items.
///
/// Never stored independently: always recomputed from the current line item
/// list. Each field is rounded to two decimals after summation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub total_discount: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

/// Result of pricing a whole document.
#[derive(Debug, Clone, Serialize)]
pub struct PricedDocument {
    pub items: Vec<PricedLineItem>,
    pub totals: DocumentTotals,
}
