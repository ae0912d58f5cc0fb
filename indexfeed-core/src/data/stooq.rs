//! Stooq CSV download endpoint.
//!
//! Fetches the full daily history for one ticker from `/q/d/l/`. A non-success
//! status is surfaced as-is; there is no retry.

use super::provider::{FeedError, PriceSource};
use crate::config::FeedConfig;
use reqwest::header::ACCEPT;
use reqwest::Url;
use std::time::Duration;

const CSV_PATH: &str = "/q/d/l/";
const ACCEPT_CSV: &str = "text/csv,*/*";

/// Stooq daily-history source.
pub struct StooqSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl StooqSource {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| FeedError::Config(format!("failed to build HTTP client: {e}")))?;

        let source = Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        };
        // Surface a bad base URL before any request goes out.
        source.csv_url("")?;
        Ok(source)
    }

    /// Download URL for a ticker: `<base>/q/d/l/?s=<ticker>&i=d`.
    pub fn csv_url(&self, ticker: &str) -> Result<Url, FeedError> {
        Url::parse_with_params(
            &format!("{}{CSV_PATH}", self.base_url),
            &[("s", ticker), ("i", "d")],
        )
        .map_err(|e| FeedError::Config(format!("invalid base URL '{}': {e}", self.base_url)))
    }
}

impl PriceSource for StooqSource {
    fn name(&self) -> &str {
        "stooq"
    }

    fn fetch_csv(&self, ticker: &str) -> Result<String, FeedError> {
        let url = self.csv_url(ticker)?;
        tracing::debug!(%url, "requesting daily history");

        let network = |e: reqwest::Error| FeedError::Network {
            ticker: ticker.to_string(),
            reason: e.to_string(),
        };

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_CSV)
            .send()
            .map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                ticker: ticker.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(network)
    }
}
