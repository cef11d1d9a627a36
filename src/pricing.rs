//! Line item pricing and document totals.
//!
//! All arithmetic is `rust_decimal` fixed-point. Monetary rounding is two
//! decimal places, half-up, applied exactly once at the end of each derived
//! value: per-line outputs are rounded for presentation, while aggregation
//! sums the full-precision values and rounds each total after summation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineError;
use crate::models::{
    DocumentTotals, LineItemInput, PricedDocument, PricedLineItem, RawCharges, TaxPolicy,
};

/// Round a monetary value to two decimals, half-up.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn validate(input: &LineItemInput, tax_rate_percent: Decimal) -> Result<(), EngineError> {
    if input.product_name.trim().is_empty() {
        return Err(EngineError::validation(
            "product_name",
            "must not be empty",
        ));
    }
    if input.quantity < 1 {
        return Err(EngineError::validation("quantity", "must be at least 1"));
    }
    if input.list_price < Decimal::ZERO {
        return Err(EngineError::validation(
            "list_price",
            "must not be negative",
        ));
    }
    if input.discount_percent < Decimal::ZERO || input.discount_percent > Decimal::ONE_HUNDRED {
        return Err(EngineError::validation(
            "discount_percent",
            "must be between 0 and 100",
        ));
    }
    if tax_rate_percent < Decimal::ZERO {
        return Err(EngineError::validation(
            "tax_rate_percent",
            "must not be negative",
        ));
    }
    Ok(())
}

/// Price a single line item at the given tax rate.
///
/// Pure: validates the input, then derives amount, discount, tax, and total.
/// A precondition violation fails the whole computation with the offending
/// field named; nothing partial is returned.
pub fn compute_line_item(
    input: &LineItemInput,
    tax_rate_percent: Decimal,
) -> Result<PricedLineItem, EngineError> {
    validate(input, tax_rate_percent)?;

    let amount = Decimal::from(input.quantity) * input.list_price;
    let discount_amount = amount * input.discount_percent / Decimal::ONE_HUNDRED;
    let after_discount = amount - discount_amount;
    let tax = after_discount * tax_rate_percent / Decimal::ONE_HUNDRED;
    let total = after_discount + tax;

    Ok(PricedLineItem {
        product_name: input.product_name.clone(),
        quantity: input.quantity,
        list_price: input.list_price,
        discount_percent: input.discount_percent,
        tax_rate_percent,
        amount: round_money(amount),
        discount_amount: round_money(discount_amount),
        tax: round_money(tax),
        total: round_money(total),
        raw: RawCharges {
            amount,
            discount_amount,
            tax,
            total,
        },
    })
}

/// Sum priced line items into document totals.
///
/// Sums the pre-rounding values and rounds each total once, so the result is
/// independent of per-line rounding and of item order. An empty slice yields
/// zero totals.
pub fn aggregate(items: &[PricedLineItem]) -> DocumentTotals {
    let mut subtotal = Decimal::ZERO;
    let mut total_discount = Decimal::ZERO;
    let mut total_tax = Decimal::ZERO;
    let mut grand_total = Decimal::ZERO;

    for item in items {
        subtotal += item.raw.amount;
        total_discount += item.raw.discount_amount;
        total_tax += item.raw.tax;
        grand_total += item.raw.total;
    }

    DocumentTotals {
        subtotal: round_money(subtotal),
        total_discount: round_money(total_discount),
        total_tax: round_money(total_tax),
        grand_total: round_money(grand_total),
    }
}

/// Price every line of a document under the given tax policy, then aggregate.
///
/// A validation failure on any line aborts the whole document and reports the
/// zero-based line index alongside the field.
pub fn price_document(
    policy: &TaxPolicy,
    inputs: &[LineItemInput],
) -> Result<PricedDocument, EngineError> {
    let mut items = Vec::with_capacity(inputs.len());
    for (line, input) in inputs.iter().enumerate() {
        let item = compute_line_item(input, policy.rate_for(input)).map_err(|e| match e {
            EngineError::Validation { field, message } => EngineError::LineValidation {
                line,
                field,
                message,
            },
            other => other,
        })?;
        items.push(item);
    }
    let totals = aggregate(&items);
    Ok(PricedDocument { items, totals })
}
