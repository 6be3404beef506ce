//! Historical Bitcoin price series.
//!
//! The `/prices/historical` endpoint serves time-bucketed prices as
//! headerless CSV pages (`timestamp,price` per line, roughly 10 minute bars,
//! 1000 rows per page). This module holds the page parser and the loaded
//! series type; fetching lives on
//! [`CoinbaseRestClient`](crate::rest::CoinbaseRestClient).

pub mod local;

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Errors while parsing a price page or file.
#[derive(Error, Debug)]
pub enum PricePageError {
    #[error("Invalid line format: expected 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("Failed to parse timestamp '{0}': {1}")]
    InvalidTimestamp(String, String),

    #[error("Failed to parse price '{0}': {1}")]
    InvalidPrice(String, String),
}

/// One time-bucketed price observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Observation timestamp.
    pub timestamp: OffsetDateTime,
    /// Price in the quote currency.
    pub price: Decimal,
}

/// Why a paginated price load stopped.
///
/// A failed page fetch is externally indistinguishable from running out of
/// data (the loop just stops), but the reason is recorded here so callers
/// and tests can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every page in the requested range was fetched.
    EndOfRange,
    /// Fetching `page` failed; pages from there on were not requested.
    PageFetchFailed {
        /// The first page that failed.
        page: u32,
    },
}

/// A loaded price series, sorted ascending by timestamp.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
    stopped: StopReason,
}

impl PriceHistory {
    pub(crate) fn new(mut points: Vec<PricePoint>, stopped: StopReason) -> Self {
        points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Self { points, stopped }
    }

    /// The loaded points, ascending by timestamp.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Consume the history, returning the points.
    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    /// Why loading stopped.
    pub fn stopped(&self) -> StopReason {
        self.stopped
    }

    /// Number of loaded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points were loaded.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Parse one `timestamp,price` line.
pub(crate) fn parse_price_line(line: &str) -> Result<PricePoint, PricePageError> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

    if fields.len() != 2 {
        return Err(PricePageError::InvalidFieldCount(fields.len()));
    }

    let timestamp = OffsetDateTime::parse(fields[0], &Rfc3339).map_err(|e| {
        PricePageError::InvalidTimestamp(fields[0].to_string(), e.to_string())
    })?;

    let price = Decimal::from_str(fields[1])
        .map_err(|e| PricePageError::InvalidPrice(fields[1].to_string(), e.to_string()))?;

    Ok(PricePoint { timestamp, price })
}

/// Parse a full price page body. Empty lines are skipped; any malformed
/// line fails the whole page, which the pagination loop treats the same as
/// a failed fetch.
pub(crate) fn parse_price_page(body: &str) -> Result<Vec<PricePoint>, PricePageError> {
    body.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(parse_price_line)
        .collect()
}
