//! CSV → price series.
//!
//! Columns are located by header name (`Date`, `Close`); everything else is
//! ignored. Rows with a missing field, an unparseable date, or a non-finite
//! close are dropped and counted rather than failing the parse.

use super::provider::{FeedError, PricePoint};
use chrono::{DateTime, NaiveDate};

const DATE_COLUMN: &str = "Date";
const CLOSE_COLUMN: &str = "Close";

/// Output of [`parse_csv`]: the sorted series plus how many data rows were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSeries {
    pub points: Vec<PricePoint>,
    pub dropped: usize,
}

/// Parse daily-history CSV into points sorted ascending by timestamp.
pub fn parse_csv(text: &str) -> Result<ParsedSeries, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FeedError::Format(format!("unreadable header row: {e}")))?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| FeedError::Format(format!("missing '{name}' column")))
    };
    let date_idx = column(DATE_COLUMN)?;
    let close_idx = column(CLOSE_COLUMN)?;

    let mut points = Vec::new();
    let mut dropped = 0;

    for record in reader.records() {
        let Ok(record) = record else {
            dropped += 1;
            continue;
        };

        let date = record.get(date_idx).unwrap_or_default();
        let close = record.get(close_idx).unwrap_or_default();
        if date.is_empty() || close.is_empty() {
            dropped += 1;
            continue;
        }

        let point = parse_timestamp_ms(date)
            .zip(close.parse::<f64>().ok())
            .and_then(|(t, c)| PricePoint::new(t, c));

        match point {
            Some(p) => points.push(p),
            None => dropped += 1,
        }
    }

    points.sort_by_key(|p| p.t);
    Ok(ParsedSeries { points, dropped })
}

/// Parse a date cell into epoch milliseconds.
///
/// Plain `YYYY-MM-DD` dates resolve to UTC midnight. Full RFC 3339
/// timestamps are accepted as well.
pub fn parse_timestamp_ms(s: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp_millis())
}
