//! Line item models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw line item input as collected from a client request.
///
/// `tax_rate_percent` is honored only for document kinds with per-line tax
/// entry; fixed-rate kinds supply their rate through [`super::TaxPolicy`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    pub product_name: String,
    pub quantity: i64,
    pub list_price: Decimal,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default)]
    pub tax_rate_percent: Option<Decimal>,
}

/// A fully priced line item.
///
/// The four derived fields are rounded to two decimal places (half-up) and
/// are recomputed from the input fields before every save; they are never
/// accepted back as client input, which is why this type only serializes.
/// The private pre-rounding values feed document aggregation, so totals sum
/// the exact amounts rather than accumulating per-line rounding error.
#[derive(Debug, Clone, Serialize)]
pub struct PricedLineItem {
    pub product_name: String,
    pub quantity: i64,
    pub list_price: Decimal,
    pub discount_percent: Decimal,
    pub tax_rate_percent: Decimal,
    pub amount: Decimal,
    pub discount_amount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing)]
    pub(crate) raw: RawCharges,
}

/// Full-precision charges for one line, before monetary rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RawCharges {
    pub amount: Decimal,
    pub discount_amount: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}
