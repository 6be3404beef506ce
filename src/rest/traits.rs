//! Trait definition for the Coinbase REST API client.
//!
//! This module provides the `CoinbaseClient` trait which abstracts all REST
//! API operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., serializing signing for a shared credential)
//! - Alternative implementations

use std::collections::HashMap;
use std::future::Future;

use rust_decimal::Decimal;

use crate::error::CoinbaseError;
use crate::history::PriceHistory;
use crate::rest::CoinbaseRestClient;
use crate::rest::private::{
    AccountChanges, Authorization, BuyRequest, Contacts, PaymentMethods, ReceiveAddress,
    RequestMoneyRequest, SellRequest, SendMoneyRequest, TransactionResponse, TransferResponse,
};
use crate::rest::quote::QuoteSummary;
use crate::types::{Money, Shaped};

/// Trait defining all Coinbase REST API operations.
///
/// All methods are async; private operations return
/// `Result<Shaped<T>, CoinbaseError>` so callers can distinguish a decoded
/// record from a raw response from a failed request.
pub trait CoinbaseClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get currency exchange rates.
    fn get_exchange_rates(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, Decimal>, CoinbaseError>> + Send;

    /// Load historical prices from pages `start_page..=end_page`.
    fn get_historical_prices(
        &self,
        start_page: u32,
        end_page: u32,
    ) -> impl Future<Output = PriceHistory> + Send;

    // ========== Private Endpoints - Prices ==========

    /// Get the total buy price for `qty` bitcoin.
    fn get_buy_price(
        &self,
        qty: Decimal,
    ) -> impl Future<Output = Result<Shaped<QuoteSummary>, CoinbaseError>> + Send;

    /// Get the total sell price for `qty` bitcoin.
    fn get_sell_price(
        &self,
        qty: Decimal,
    ) -> impl Future<Output = Result<Shaped<QuoteSummary>, CoinbaseError>> + Send;

    /// Get the spot price of bitcoin in `currency`.
    fn get_spot_rate(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<Shaped<Money>, CoinbaseError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get the account balance.
    fn get_balance(&self) -> impl Future<Output = Result<Shaped<Money>, CoinbaseError>> + Send;

    /// Get the account's current receive address.
    fn get_receive_address(
        &self,
    ) -> impl Future<Output = Result<Shaped<ReceiveAddress>, CoinbaseError>> + Send;

    /// Get the account's contacts.
    fn get_contacts(&self)
    -> impl Future<Output = Result<Shaped<Contacts>, CoinbaseError>> + Send;

    /// Get all changes to the account.
    fn get_account_changes(
        &self,
    ) -> impl Future<Output = Result<Shaped<AccountChanges>, CoinbaseError>> + Send;

    /// Get information on the application's account access.
    fn get_authorizations(
        &self,
    ) -> impl Future<Output = Result<Shaped<Authorization>, CoinbaseError>> + Send;

    /// List the payment methods associated with the account.
    fn get_payment_methods(
        &self,
    ) -> impl Future<Output = Result<Shaped<PaymentMethods>, CoinbaseError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Buy bitcoin for fiat.
    fn buy(
        &self,
        request: &BuyRequest,
    ) -> impl Future<Output = Result<Shaped<TransferResponse>, CoinbaseError>> + Send;

    /// Sell bitcoin for fiat.
    fn sell(
        &self,
        request: &SellRequest,
    ) -> impl Future<Output = Result<Shaped<TransferResponse>, CoinbaseError>> + Send;

    // ========== Private Endpoints - Transactions ==========

    /// Request money from an email address.
    fn request_money(
        &self,
        request: &RequestMoneyRequest,
    ) -> impl Future<Output = Result<Shaped<TransactionResponse>, CoinbaseError>> + Send;

    /// Send money to an email or bitcoin address.
    fn send_money(
        &self,
        request: &SendMoneyRequest,
    ) -> impl Future<Output = Result<Shaped<TransactionResponse>, CoinbaseError>> + Send;

    /// Look up a transaction's details by id.
    fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> impl Future<Output = Result<Shaped<TransactionResponse>, CoinbaseError>> + Send;
}

impl CoinbaseClient for CoinbaseRestClient {
    async fn get_exchange_rates(&self) -> Result<HashMap<String, Decimal>, CoinbaseError> {
        CoinbaseRestClient::get_exchange_rates(self).await
    }

    async fn get_historical_prices(&self, start_page: u32, end_page: u32) -> PriceHistory {
        CoinbaseRestClient::get_historical_prices(self, start_page, end_page).await
    }

    async fn get_buy_price(&self, qty: Decimal) -> Result<Shaped<QuoteSummary>, CoinbaseError> {
        CoinbaseRestClient::get_buy_price(self, qty).await
    }

    async fn get_sell_price(&self, qty: Decimal) -> Result<Shaped<QuoteSummary>, CoinbaseError> {
        CoinbaseRestClient::get_sell_price(self, qty).await
    }

    async fn get_spot_rate(&self, currency: &str) -> Result<Shaped<Money>, CoinbaseError> {
        CoinbaseRestClient::get_spot_rate(self, currency).await
    }

    async fn get_balance(&self) -> Result<Shaped<Money>, CoinbaseError> {
        CoinbaseRestClient::get_balance(self).await
    }

    async fn get_receive_address(&self) -> Result<Shaped<ReceiveAddress>, CoinbaseError> {
        CoinbaseRestClient::get_receive_address(self).await
    }

    async fn get_contacts(&self) -> Result<Shaped<Contacts>, CoinbaseError> {
        CoinbaseRestClient::get_contacts(self).await
    }

    async fn get_account_changes(&self) -> Result<Shaped<AccountChanges>, CoinbaseError> {
        CoinbaseRestClient::get_account_changes(self).await
    }

    async fn get_authorizations(&self) -> Result<Shaped<Authorization>, CoinbaseError> {
        CoinbaseRestClient::get_authorizations(self).await
    }

    async fn get_payment_methods(&self) -> Result<Shaped<PaymentMethods>, CoinbaseError> {
        CoinbaseRestClient::get_payment_methods(self).await
    }

    async fn buy(&self, request: &BuyRequest) -> Result<Shaped<TransferResponse>, CoinbaseError> {
        CoinbaseRestClient::buy(self, request).await
    }

    async fn sell(
        &self,
        request: &SellRequest,
    ) -> Result<Shaped<TransferResponse>, CoinbaseError> {
        CoinbaseRestClient::sell(self, request).await
    }

    async fn request_money(
        &self,
        request: &RequestMoneyRequest,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        CoinbaseRestClient::request_money(self, request).await
    }

    async fn send_money(
        &self,
        request: &SendMoneyRequest,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        CoinbaseRestClient::send_money(self, request).await
    }

    async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<Shaped<TransactionResponse>, CoinbaseError> {
        CoinbaseRestClient::get_transaction(self, transaction_id).await
    }
}
