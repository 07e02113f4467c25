//! Line-item totals: the fixed subtotal → discount → tax → total pipeline
//! used by order/invoice rows.
//!
//! The order of steps is part of the contract: the discount applies to the
//! subtotal, tax applies to the discounted amount. Rounding happens
//! half-up at two decimals only when a value leaves the pipeline; grand
//! totals across rows sum the already-rounded row totals (a compatibility
//! behavior the display depends on, not an accident).

use crate::core::{Record, Value};

/// One editable row of an order/invoice table. Inputs arrive as loosely
/// typed form values; anything missing or non-numeric counts as 0.
#[derive(Debug, Clone, Default)]
pub struct LineItem {
    pub product: Option<String>,
    pub price: Value,
    pub quantity: Value,
    pub discount_percent: Value,
    pub tax_percent: Value,
}

impl LineItem {
    /// Read a line item out of a record using the conventional field names
    /// (`product`, `price`, `quantity`, `discountPercent`, `taxPercent`).
    pub fn from_record(record: &Record) -> Self {
        Self {
            product: record
                .get("product")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            price: record.get("price").cloned().unwrap_or(Value::Null),
            quantity: record.get("quantity").cloned().unwrap_or(Value::Null),
            discount_percent: record
                .get("discountPercent")
                .cloned()
                .unwrap_or(Value::Null),
            tax_percent: record.get("taxPercent").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Computed amounts for one row, each rounded half-up to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub taxable_amount: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Advisory validation finding: the row stays in the table, the message is
/// shown inline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineIssue {
    pub field: String,
    pub message: String,
}

/// Half-up rounding at two decimals (the money output step).
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Form values come in as numbers or numeric strings; everything else is 0.
fn numeric_or_zero(value: &Value) -> f64 {
    match value {
        Value::Integer(i) => *i as f64,
        Value::Float(f) if f.is_finite() => *f,
        Value::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Run the fixed pipeline for one row.
///
/// Internal math stays unrounded; only the published amounts are rounded,
/// so a single row never accumulates rounding error across steps.
pub fn compute(item: &LineItem) -> LineTotals {
    let price = numeric_or_zero(&item.price);
    let quantity = numeric_or_zero(&item.quantity);
    let discount_percent = numeric_or_zero(&item.discount_percent);
    let tax_percent = numeric_or_zero(&item.tax_percent);

    let subtotal = price * quantity;
    let discount_amount = subtotal * discount_percent / 100.0;
    let taxable_amount = subtotal - discount_amount;
    let tax_amount = taxable_amount * tax_percent / 100.0;
    let total = taxable_amount + tax_amount;

    LineTotals {
        subtotal: round_money(subtotal),
        discount_amount: round_money(discount_amount),
        taxable_amount: round_money(taxable_amount),
        tax_amount: round_money(tax_amount),
        total: round_money(total),
    }
}

/// Grand total of a multi-row table: the sum of per-row rounded totals
/// (not a rounded sum of exact values).
pub fn grand_total(items: &[LineItem]) -> f64 {
    round_money(items.iter().map(|item| compute(item).total).sum())
}

/// Advisory rules: violations flag the row without removing it.
pub fn validate(item: &LineItem) -> Vec<LineIssue> {
    let mut issues = Vec::new();

    if item.product.is_none() {
        issues.push(LineIssue {
            field: "product".into(),
            message: "select a product".into(),
        });
    }
    if numeric_or_zero(&item.quantity) < 1.0 {
        issues.push(LineIssue {
            field: "quantity".into(),
            message: "quantity must be at least 1".into(),
        });
    }
    if numeric_or_zero(&item.price) < 0.0 {
        issues.push(LineIssue {
            field: "price".into(),
            message: "price cannot be negative".into(),
        });
    }
    if numeric_or_zero(&item.discount_percent) < 0.0 {
        issues.push(LineIssue {
            field: "discountPercent".into(),
            message: "discount cannot be negative".into(),
        });
    }
    if numeric_or_zero(&item.tax_percent) < 0.0 {
        issues.push(LineIssue {
            field: "taxPercent".into(),
            message: "tax cannot be negative".into(),
        });
    }

    issues
}
