//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Every call signs the exact URL and body it transmits; see
//! [`crate::auth`] for the signing contract.

mod types;

pub use types::*;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseRestClient;
use crate::rest::endpoints::private;
use crate::rest::quote::{QuoteSummary, format_quote};
use crate::types::{Money, Shaped};

#[derive(Serialize)]
struct QtyParams {
    qty: Decimal,
}

#[derive(Serialize)]
struct CurrencyParams<'a> {
    currency: &'a str,
}

impl CoinbaseRestClient {
    /// Get the account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::rest::CoinbaseRestClient;
    /// use coinbase_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = CoinbaseRestClient::builder().credentials(credentials).build();
    ///
    ///     if let Some(balance) = client.get_balance().await?.record() {
    ///         println!("{} {}", balance.amount, balance.currency);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance(&self) -> Result<Shaped<Money>, CoinbaseError> {
        self.private_get(private::BALANCE).await
    }

    /// Get the account's current receive address.
    pub async fn get_receive_address(&self) -> Result<Shaped<ReceiveAddress>, CoinbaseError> {
        self.private_get(private::RECEIVE_ADDRESS).await
    }

    /// Get the account's contacts.
    pub async fn get_contacts(&self) -> Result<Shaped<Contacts>, CoinbaseError> {
        self.private_get(private::CONTACTS).await
    }

    /// Get all transactions, purchases and other changes to the account.
    pub async fn get_account_changes(&self) -> Result<Shaped<AccountChanges>, CoinbaseError> {
        self.private_get(private::ACCOUNT_CHANGES).await
    }

    /// Get information on the application's account access.
    pub async fn get_authorizations(&self) -> Result<Shaped<Authorization>, CoinbaseError> {
        self.private_get(private::AUTHORIZATION).await
    }

    /// List the payment methods associated with the account.
    pub async fn get_payment_methods(&self) -> Result<Shaped<PaymentMethods>, CoinbaseError> {
        self.private_get(private::PAYMENT_METHODS).await
    }

    /// Get the total buy price for `qty` bitcoin, flattened to a
    /// [`QuoteSummary`] when the response has the expected shape.
    pub async fn get_buy_price(
        &self,
        qty: Decimal,
    ) -> Result<Shaped<QuoteSummary>, CoinbaseError> {
        let (_, quote) = self
            .private_get_value(private::PRICES_BUY, &QtyParams { qty })
            .await?;
        Ok(format_quote(quote))
    }

    /// Get the total sell price for `qty` bitcoin, flattened to a
    /// [`QuoteSummary`] when the response has the expected shape.
    pub async fn get_sell_price(
        &self,
        qty: Decimal,
    ) -> Result<Shaped<QuoteSummary>, CoinbaseError> {
        let (_, quote) = self
            .private_get_value(private::PRICES_SELL, &QtyParams { qty })
            .await?;
        Ok(format_quote(quote))
    }

    /// Get the spot price of bitcoin in `currency`.
    pub async fn get_spot_rate(&self, currency: &str) -> Result<Shaped<Money>, CoinbaseError> {
        self.private_get_with_params(private::SPOT_RATE, &CurrencyParams { currency })
            .await
    }

    /// Buy bitcoin for fiat.
    pub async fn buy(
        &self,
        request: &BuyRequest,
    ) -> Result<Shaped<TransferResponse>, CoinbaseError> {
        self.private_post(private::BUYS, request).await
    }

    /// Sell bitcoin for fiat.
    pub async fn sell(
        &self,
        request: &SellRequest,
    ) -> Result<Shaped<TransferResponse>, CoinbaseError> {
        self.private_post(private::SELLS, request).await
    }

    /// Request money from an email address, to be delivered to this account.
    pub async fn request_money(
        &self,
        request: &RequestMoneyRequest,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        self.private_post(
            private::REQUEST_MONEY,
            &TransactionEnvelope { transaction: request },
        )
        .await
    }

    /// Send money from this account to an email or bitcoin address.
    pub async fn send_money(
        &self,
        request: &SendMoneyRequest,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        self.private_post(
            private::SEND_MONEY,
            &TransactionEnvelope { transaction: request },
        )
        .await
    }

    /// Look up a transaction's details by id.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        let endpoint = format!("{}/{}", private::TRANSACTIONS, transaction_id);
        self.private_get(&endpoint).await
    }
}
