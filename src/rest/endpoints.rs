//! Coinbase REST API endpoint constants.

/// Base URL for the Coinbase v1 REST API.
pub const COINBASE_BASE_URL: &str = "https://coinbase.com/api/v1";

/// Public endpoints (no authentication required).
pub mod public {
    /// Get paginated historical prices (CSV pages).
    pub const HISTORICAL_PRICES: &str = "/prices/historical";
    /// Get currency exchange rates.
    pub const EXCHANGE_RATES: &str = "/currencies/exchange_rates";
}

/// Private endpoints (authentication required).
pub mod private {
    // Price endpoints
    /// Get the total buy price for a bitcoin amount.
    pub const PRICES_BUY: &str = "/prices/buy";
    /// Get the total sell price for a bitcoin amount.
    pub const PRICES_SELL: &str = "/prices/sell";
    /// Get the spot price of bitcoin.
    pub const SPOT_RATE: &str = "/prices/spot_rate";

    // Account endpoints
    /// Get the account balance.
    pub const BALANCE: &str = "/account/balance";
    /// Get the account's current receive address.
    pub const RECEIVE_ADDRESS: &str = "/account/receive_address";
    /// Get the account's contacts.
    pub const CONTACTS: &str = "/contacts";
    /// Get transactions, purchases and other changes to the account.
    pub const ACCOUNT_CHANGES: &str = "/account_changes";
    /// Get information on the application's account access.
    pub const AUTHORIZATION: &str = "/authorization";
    /// List the payment methods associated with the account.
    pub const PAYMENT_METHODS: &str = "/payment_methods";

    // Trading endpoints
    /// Buy bitcoin for fiat.
    pub const BUYS: &str = "/buys";
    /// Sell bitcoin for fiat.
    pub const SELLS: &str = "/sells";

    // Transaction endpoints
    /// Request money from an email address.
    pub const REQUEST_MONEY: &str = "/transactions/request_money";
    /// Send money to an email or bitcoin address.
    pub const SEND_MONEY: &str = "/transactions/send_money";
    /// Look up a transaction by id (append `/{id}`).
    pub const TRANSACTIONS: &str = "/transactions";
}
