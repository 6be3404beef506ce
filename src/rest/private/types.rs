//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Money;

/// The account's current bitcoin receive address.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiveAddress {
    /// Whether the lookup succeeded.
    pub success: bool,
    /// The receive address.
    pub address: String,
    /// Callback URL registered for the address, if any.
    #[serde(default)]
    pub callback_url: Option<String>,
}

/// One page of the account's contacts.
#[derive(Debug, Clone, Deserialize)]
pub struct Contacts {
    /// The contacts on this page.
    pub contacts: Vec<ContactEntry>,
    /// Total number of contacts.
    pub total_count: u32,
    /// Number of pages.
    pub num_pages: u32,
    /// The current page.
    pub current_page: u32,
}

/// Envelope around one contact.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    /// The contact itself.
    pub contact: Contact,
}

/// A contact the account has transacted with.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    /// The contact's email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// All transactions, purchases and other changes related to the account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountChanges {
    /// The user the changes belong to.
    pub current_user: UserRef,
    /// Current account balance.
    pub balance: Money,
    /// Total number of changes.
    pub total_count: u32,
    /// Number of pages.
    pub num_pages: u32,
    /// The current page.
    pub current_page: u32,
    /// The changes on this page.
    pub account_changes: Vec<AccountChange>,
}

/// One change to the account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountChange {
    /// Change id.
    pub id: String,
    /// The transaction behind the change.
    pub transaction_id: String,
    /// Whether the change is confirmed.
    pub confirmed: bool,
    /// Amount of the change.
    pub amount: Money,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Display metadata; shape varies by change category.
    #[serde(default)]
    pub cache: Value,
}

/// Information on the application's account access.
#[derive(Debug, Clone, Deserialize)]
pub struct Authorization {
    /// The authentication scheme in use.
    pub auth_type: String,
    /// Scheme-specific metadata.
    #[serde(default)]
    pub meta: Value,
}

/// The payment methods associated with the account.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethods {
    /// The payment methods.
    pub payment_methods: Vec<PaymentMethodEntry>,
    /// Id of the default method for buys.
    #[serde(default)]
    pub default_buy: Option<String>,
    /// Id of the default method for sells.
    #[serde(default)]
    pub default_sell: Option<String>,
}

/// Envelope around one payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethodEntry {
    /// The payment method itself.
    pub payment_method: PaymentMethod,
}

/// One payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    /// Payment method id.
    pub id: String,
    /// Display name, e.g. "US Bank ****4567".
    pub name: String,
    /// Whether the method can fund buys.
    pub can_buy: bool,
    /// Whether the method can receive sell proceeds.
    pub can_sell: bool,
}

/// Parameters for a buy order.
#[derive(Debug, Clone, Serialize)]
pub struct BuyRequest {
    /// Bitcoin quantity to buy.
    pub qty: Decimal,
    /// Process the order even if the price can no longer be guaranteed.
    pub agree_btc_amount_varies: bool,
}

impl BuyRequest {
    /// Buy `qty` bitcoin at the guaranteed price only.
    pub fn new(qty: Decimal) -> Self {
        Self {
            qty,
            agree_btc_amount_varies: false,
        }
    }

    /// Allow the order to go through even if the price varies.
    pub fn allow_price_varies(mut self) -> Self {
        self.agree_btc_amount_varies = true;
        self
    }
}

/// Parameters for a sell order.
#[derive(Debug, Clone, Serialize)]
pub struct SellRequest {
    /// Bitcoin quantity to sell.
    pub qty: Decimal,
}

impl SellRequest {
    /// Sell `qty` bitcoin.
    pub fn new(qty: Decimal) -> Self {
        Self { qty }
    }
}

/// A completed or pending transfer, as returned by buys and sells.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferResponse {
    /// Whether the order was accepted.
    pub success: bool,
    /// The transfer record.
    #[serde(default)]
    pub transfer: Option<Transfer>,
    /// Error messages when the order was rejected.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One bitcoin/fiat transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    /// "Buy" or "Sell".
    #[serde(rename = "type")]
    pub kind: String,
    /// Transfer reference code.
    pub code: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Fees charged, by collector ("coinbase", "bank").
    #[serde(default)]
    pub fees: std::collections::HashMap<String, TransferFee>,
    /// Transfer status ("created", "pending", "completed", ...).
    pub status: String,
    /// Expected payout date (RFC 3339).
    #[serde(default)]
    pub payout_date: Option<String>,
    /// Bitcoin side of the transfer.
    pub btc: Money,
    /// Fiat subtotal before fees.
    pub subtotal: Money,
    /// Fiat total including fees.
    pub total: Money,
}

/// A fee attached to a transfer, in integer cents.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferFee {
    /// Fee amount in cents.
    pub cents: u64,
    /// Fee currency.
    pub currency_iso: String,
}

/// Parameters for requesting money from an email address.
///
/// A BTC-denominated request carries a bare `amount`; any other currency
/// carries `amount_string` plus `amount_currency_iso`, matching what the
/// server expects on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMoneyRequest {
    /// Email address to request from.
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_currency_iso: Option<String>,
    /// Notes to include with the request.
    pub notes: String,
}

impl RequestMoneyRequest {
    /// Request `amount` BTC from `from`.
    pub fn btc(from: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from: from.into(),
            amount: Some(amount),
            amount_string: None,
            amount_currency_iso: None,
            notes: String::new(),
        }
    }

    /// Request an amount denominated in `currency` from `from`.
    pub fn in_currency(
        from: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            amount: None,
            amount_string: Some(amount.to_string()),
            amount_currency_iso: Some(currency.into()),
            notes: String::new(),
        }
    }

    /// Attach notes to the request.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Parameters for sending money to an email or bitcoin address.
///
/// Same BTC-vs-fiat split as [`RequestMoneyRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct SendMoneyRequest {
    /// Email or bitcoin address to send to.
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_currency_iso: Option<String>,
    /// Notes to include with the transaction.
    pub notes: String,
}

impl SendMoneyRequest {
    /// Send `amount` BTC to `to`.
    pub fn btc(to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            to: to.into(),
            amount: Some(amount),
            amount_string: None,
            amount_currency_iso: None,
            notes: String::new(),
        }
    }

    /// Send an amount denominated in `currency` to `to`.
    pub fn in_currency(
        to: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            amount: None,
            amount_string: Some(amount.to_string()),
            amount_currency_iso: Some(currency.into()),
            notes: String::new(),
        }
    }

    /// Attach notes to the transaction.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Envelope the transaction endpoints expect around their parameters.
#[derive(Debug, Serialize)]
pub(crate) struct TransactionEnvelope<P> {
    pub transaction: P,
}

/// A money request or send, as returned by the transaction endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    /// Whether the operation succeeded. Absent on plain lookups.
    #[serde(default)]
    pub success: Option<bool>,
    /// The transaction record.
    #[serde(default)]
    pub transaction: Option<Transaction>,
    /// Error messages when the operation was rejected.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One transaction on the account.
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: String,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Network hash, once broadcast.
    #[serde(default)]
    pub hsh: Option<String>,
    /// Notes attached to the transaction.
    #[serde(default)]
    pub notes: Option<String>,
    /// Amount transacted.
    pub amount: Money,
    /// True for money requests, false for sends.
    pub request: bool,
    /// Transaction status ("pending", "complete", ...).
    pub status: String,
    /// Sending user.
    #[serde(default)]
    pub sender: Option<UserRef>,
    /// Receiving user.
    #[serde(default)]
    pub recipient: Option<UserRef>,
    /// Receiving address, for sends to a bitcoin address.
    #[serde(default)]
    pub recipient_address: Option<String>,
}

/// Minimal reference to a Coinbase user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    /// User id.
    #[serde(default)]
    pub id: Option<String>,
    /// User email.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}
