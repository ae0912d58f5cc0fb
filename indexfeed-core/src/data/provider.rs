//! Price source trait and structured error types.
//!
//! The PriceSource trait abstracts over where raw CSV comes from (the Stooq
//! endpoint in production, scripted responses in tests), so the pipeline never
//! touches the network directly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// One daily close: `t` is milliseconds since the Unix epoch (UTC), `c` the close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub t: i64,
    pub c: f64,
}

impl PricePoint {
    /// Build a point, rejecting non-finite closes.
    pub fn new(t: i64, c: f64) -> Option<Self> {
        c.is_finite().then_some(Self { t, c })
    }
}

/// Everything that can abort a feed run.
///
/// Row-level data problems are not represented here: the parser drops those
/// rows and keeps going.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error fetching {ticker}: {reason}")]
    Network { ticker: String, reason: String },

    #[error("HTTP {status} for {ticker}")]
    HttpStatus { ticker: String, status: u16 },

    #[error("unexpected CSV format: {0}")]
    Format(String),

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize result document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// A source of raw daily-history CSV, keyed by provider ticker.
pub trait PriceSource {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the full daily history for `ticker` as CSV text.
    fn fetch_csv(&self, ticker: &str) -> Result<String, FeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_rejects_non_finite_close() {
        assert!(PricePoint::new(0, f64::NAN).is_none());
        assert!(PricePoint::new(0, f64::INFINITY).is_none());
        assert_eq!(PricePoint::new(5, 1.5), Some(PricePoint { t: 5, c: 1.5 }));
    }

    #[test]
    fn http_status_message_names_ticker() {
        let err = FeedError::HttpStatus {
            ticker: "^spx".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "HTTP 503 for ^spx");
    }

    #[test]
    fn point_serializes_compactly() {
        let json = serde_json::to_string(&PricePoint { t: 1_704_067_200_000, c: 100.0 }).unwrap();
        assert_eq!(json, r#"{"t":1704067200000,"c":100.0}"#);
    }
}
