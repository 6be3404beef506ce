//! Coinbase REST API client.
//!
//! Provides the signed-request client and every REST operation.
//!
//! # Trait-based API
//!
//! The [`CoinbaseClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., a serializing wrapper for shared credentials)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use coinbase_api_client::rest::{CoinbaseClient, CoinbaseRestClient};
//!
//! async fn print_rates<C: CoinbaseClient>(client: &C) -> Result<(), coinbase_api_client::CoinbaseError> {
//!     let rates = client.get_exchange_rates().await?;
//!     println!("{:?}", rates.get("btc_to_usd"));
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
pub mod quote;
mod traits;

pub use client::{CoinbaseRestClient, CoinbaseRestClientBuilder};
pub use endpoints::*;
pub use quote::{QuoteSummary, format_quote};
pub use traits::CoinbaseClient;
