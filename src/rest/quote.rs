//! Buy/sell price quote flattening.
//!
//! Quote responses nest the interesting numbers several levels deep:
//!
//! ```json
//! {
//!   "subtotal": {"amount": "10.10", "currency": "USD"},
//!   "fees": [
//!     {"coinbase": {"amount": "0.10", "currency": "USD"}},
//!     {"bank": {"amount": "0.15", "currency": "USD"}}
//!   ],
//!   "total": {"amount": "10.35", "currency": "USD"},
//!   "amount": "10.10",
//!   "currency": "USD"
//! }
//! ```
//!
//! [`format_quote`] flattens that into a single-level [`QuoteSummary`]. A
//! quote that doesn't carry the expected shape is returned unmodified as
//! [`Shaped::Raw`] rather than failing.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use crate::types::Shaped;

/// A flattened buy or sell price quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSummary {
    /// Coinbase's fee for the trade.
    pub coinbase_fee: Decimal,
    /// The bank fee for the trade.
    pub bank_fee: Decimal,
    /// Price before fees.
    pub subtotal: Decimal,
    /// Quote currency.
    pub currency: String,
    /// Total price including fees.
    pub amount: Decimal,
}

/// Flatten a quote response, or hand it back unchanged if it doesn't have
/// the expected shape.
pub fn format_quote(quote: Value) -> Shaped<QuoteSummary> {
    match flatten(&quote) {
        Some(summary) => Shaped::Record(summary),
        None => Shaped::Raw(quote),
    }
}

fn flatten(quote: &Value) -> Option<QuoteSummary> {
    let fees = quote.get("fees")?.as_array()?;
    Some(QuoteSummary {
        coinbase_fee: fee_amount(fees, "coinbase")?,
        bank_fee: fee_amount(fees, "bank")?,
        subtotal: decimal_value(quote.get("subtotal")?.get("amount")?)?,
        currency: quote.get("currency")?.as_str()?.to_string(),
        amount: decimal_value(quote.get("amount")?)?,
    })
}

/// Find the fee entry carrying `name` and parse its amount.
///
/// Fee entries arrive as single-key objects in a fixed order; looked up by
/// name here so a reordering on the server side doesn't break the flatten.
fn fee_amount(fees: &[Value], name: &str) -> Option<Decimal> {
    fees.iter()
        .find_map(|entry| entry.get(name))
        .and_then(|fee| decimal_value(fee.get("amount")?))
}

fn decimal_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}
