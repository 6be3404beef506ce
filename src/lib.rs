//! # Coinbase Client
//!
//! An async Rust client library for the Coinbase v1 exchange REST API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing with time-derived nonces
//! - Account, price and trading endpoints with strong typing
//! - Explicit shaped-or-raw results: remote responses that don't match the
//!   expected schema are returned as raw JSON instead of failing
//! - Historical price loading (paginated endpoint and local CSV files)
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinbase_api_client::rest::CoinbaseRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseRestClient::new();
//!     let rates = client.get_exchange_rates().await?;
//!     println!("btc_to_usd: {:?}", rates.get("btc_to_usd"));
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod history;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::CoinbaseError;
pub use types::common::{Money, Shaped};

/// Result type alias using CoinbaseError
pub type Result<T> = std::result::Result<T, CoinbaseError>;
