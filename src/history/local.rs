//! Local CSV price files.
//!
//! Reads a saved CSV of prices with a header row: one timestamp column
//! (the index) and one price column. Files written by different tools name
//! the index column differently (`Date` and `datetime` both occur in the
//! wild), so the index column name is an argument rather than a constant.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

use super::{PricePageError, PricePoint, parse_price_line};

/// Errors while loading a local price CSV.
#[derive(Error, Debug)]
pub enum PriceFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing header row")]
    MissingHeader,

    #[error("Index column '{0}' not found in header")]
    IndexColumnNotFound(String),

    #[error("No price column next to index column '{0}'")]
    MissingPriceColumn(String),

    #[error("Line {line}: {source}")]
    Row {
        /// 1-based line number in the file.
        line: usize,
        source: PricePageError,
    },
}

/// Load a local CSV of prices.
///
/// `index_col` names the timestamp column; the price column is the first
/// remaining column. Rows keep their file order.
pub fn load_local_prices(
    path: impl AsRef<Path>,
    index_col: &str,
) -> Result<Vec<PricePoint>, PriceFileError> {
    read_local_prices(File::open(path)?, index_col)
}

/// Read a price CSV from any reader. See [`load_local_prices`].
pub fn read_local_prices<R: Read>(
    reader: R,
    index_col: &str,
) -> Result<Vec<PricePoint>, PriceFileError> {
    let mut lines = BufReader::new(reader).lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(PriceFileError::MissingHeader),
        }
    };

    let columns: Vec<&str> = header.split(',').map(|c| c.trim()).collect();
    let index_pos = columns
        .iter()
        .position(|c| *c == index_col)
        .ok_or_else(|| PriceFileError::IndexColumnNotFound(index_col.to_string()))?;
    let price_pos = (0..columns.len())
        .find(|pos| *pos != index_pos)
        .ok_or_else(|| PriceFileError::MissingPriceColumn(index_col.to_string()))?;

    let mut points = Vec::new();
    for (number, line) in lines.enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Reassemble as `timestamp,price` so row parsing matches the
        // historical page format regardless of column order.
        let fields: Vec<&str> = trimmed.split(',').map(|f| f.trim()).collect();
        let row = format!(
            "{},{}",
            fields.get(index_pos).copied().unwrap_or_default(),
            fields.get(price_pos).copied().unwrap_or_default(),
        );
        let point = parse_price_line(&row).map_err(|source| PriceFileError::Row {
            // +2: 1-based, plus the header row.
            line: number + 2,
            source,
        })?;
        points.push(point);
    }

    Ok(points)
}
