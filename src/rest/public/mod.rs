//! Public REST API endpoints (no authentication required).

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::error::CoinbaseError;
use crate::history::{PriceHistory, StopReason, parse_price_page};
use crate::rest::CoinbaseRestClient;
use crate::rest::endpoints::public;

impl CoinbaseRestClient {
    /// Get exchange rates for every currency conversion the API tracks.
    ///
    /// Rates refresh roughly every minute. Keys look like `"btc_to_usd"`
    /// and `"usd_to_btc"`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::rest::CoinbaseRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseRestClient::new();
    ///     let rates = client.get_exchange_rates().await?;
    ///     println!("btc_to_usd: {:?}", rates.get("btc_to_usd"));
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_exchange_rates(&self) -> Result<HashMap<String, Decimal>, CoinbaseError> {
        self.public_get(public::EXCHANGE_RATES).await
    }

    /// Load historical prices from pages `start_page..=end_page`.
    ///
    /// Prices are roughly 10 minute bars, 1000 per page, newest pages
    /// first. Loading stops at the first page that fails to fetch or
    /// parse; that failure is treated as the end of the data, not as an
    /// error, and later pages are never requested. The returned history
    /// is sorted ascending by timestamp and records why loading stopped.
    pub async fn get_historical_prices(&self, start_page: u32, end_page: u32) -> PriceHistory {
        let mut points = Vec::new();
        for page in start_page..=end_page {
            match self.fetch_price_page(page).await {
                Ok(mut page_points) => points.append(&mut page_points),
                Err(error) => {
                    tracing::warn!(page, %error, "price page fetch failed, treating as end of data");
                    return PriceHistory::new(points, StopReason::PageFetchFailed { page });
                }
            }
        }
        PriceHistory::new(points, StopReason::EndOfRange)
    }

    async fn fetch_price_page(
        &self,
        page: u32,
    ) -> Result<Vec<crate::history::PricePoint>, CoinbaseError> {
        let body = self
            .public_get_text(public::HISTORICAL_PRICES, &format!("page={page}"))
            .await?;
        parse_price_page(&body).map_err(|e| CoinbaseError::InvalidResponse(e.to_string()))
    }
}
