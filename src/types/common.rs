//! Common domain types for the Coinbase API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An amount of some currency, as the API's `{amount, currency}` pair.
///
/// Amounts arrive as decimal strings ("36.62") and are kept in
/// [`Decimal`] rather than floating point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount.
    pub amount: Decimal,
    /// ISO currency code ("BTC", "USD", ...).
    pub currency: String,
}

/// A response that either matched the expected record shape or didn't.
///
/// The API is shaped best-effort: a decoded record is a convenience, not a
/// guarantee. When the response doesn't fit the expected shape (a schema
/// change, an error envelope, a non-2xx payload) the raw JSON is returned
/// unmodified instead, so callers are never blocked by a shape they don't
/// recognize. This makes the three outcomes of a call explicit:
///
/// - `Ok(Shaped::Record(T))` - decoded as expected
/// - `Ok(Shaped::Raw(value))` - the server answered, shaping didn't apply
/// - `Err(_)` - the request itself failed
#[derive(Debug, Clone, PartialEq)]
pub enum Shaped<T> {
    /// The response decoded into the expected record.
    Record(T),
    /// The raw JSON response, unmodified.
    Raw(Value),
}

impl<T> Shaped<T> {
    /// True if the response decoded into the expected record.
    pub fn is_record(&self) -> bool {
        matches!(self, Shaped::Record(_))
    }

    /// True if shaping did not apply and the raw response was kept.
    pub fn is_raw(&self) -> bool {
        matches!(self, Shaped::Raw(_))
    }

    /// The decoded record, if shaping applied.
    pub fn record(self) -> Option<T> {
        match self {
            Shaped::Record(record) => Some(record),
            Shaped::Raw(_) => None,
        }
    }

    /// Borrow the decoded record, if shaping applied.
    pub fn as_record(&self) -> Option<&T> {
        match self {
            Shaped::Record(record) => Some(record),
            Shaped::Raw(_) => None,
        }
    }

    /// The raw response, if shaping did not apply.
    pub fn raw(self) -> Option<Value> {
        match self {
            Shaped::Record(_) => None,
            Shaped::Raw(value) => Some(value),
        }
    }

    /// Map the record type, leaving a raw response untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Shaped<U> {
        match self {
            Shaped::Record(record) => Shaped::Record(f(record)),
            Shaped::Raw(value) => Shaped::Raw(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_decodes_string_amounts() {
        let money: Money = serde_json::from_value(json!({
            "amount": "36.62",
            "currency": "BTC"
        }))
        .unwrap();
        assert_eq!(money.amount, "36.62".parse().unwrap());
        assert_eq!(money.currency, "BTC");
    }

    #[test]
    fn test_shaped_accessors() {
        let record: Shaped<u32> = Shaped::Record(7);
        assert!(record.is_record());
        assert_eq!(record.as_record(), Some(&7));
        assert_eq!(record.record(), Some(7));

        let raw: Shaped<u32> = Shaped::Raw(json!({"unexpected": true}));
        assert!(raw.is_raw());
        assert_eq!(raw.as_record(), None);
        assert_eq!(raw.raw().unwrap()["unexpected"], json!(true));
    }

    #[test]
    fn test_shaped_map_keeps_raw() {
        let raw: Shaped<u32> = Shaped::Raw(json!(null));
        assert!(raw.map(|n| n * 2).is_raw());
    }
}
