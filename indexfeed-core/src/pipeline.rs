//! Run orchestrator: fetch → parse → window for every registry entry, then write once.
//!
//! All-or-nothing. The first fetch or format error aborts the run before the
//! writer is reached, so an existing output file is left untouched.

use crate::data::{keep_rolling_year, parse_csv, FeedError, PriceSource, PricePoint, Registry};
use crate::document::{write_document, ResultDocument};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Fetch, parse, and window one symbol.
fn fetch_series(
    source: &dyn PriceSource,
    key: &str,
    ticker: &str,
    now: DateTime<Utc>,
) -> Result<Vec<PricePoint>, FeedError> {
    let csv = source.fetch_csv(ticker)?;
    let parsed = parse_csv(&csv)?;
    if parsed.dropped > 0 {
        tracing::debug!(key, dropped = parsed.dropped, "skipped malformed rows");
    }

    let kept = keep_rolling_year(&parsed.points, now);
    tracing::info!(
        key,
        ticker,
        parsed = parsed.points.len(),
        kept = kept.len(),
        "fetched"
    );
    Ok(kept)
}

/// Collect the windowed series for every registry entry, in registry order.
///
/// `now` anchors the rolling window. Stops at the first error.
pub fn collect_series(
    source: &dyn PriceSource,
    registry: &Registry,
    now: DateTime<Utc>,
) -> Result<Vec<(String, Vec<PricePoint>)>, FeedError> {
    registry
        .entries()
        .iter()
        .map(|entry| {
            fetch_series(source, &entry.key, &entry.ticker, now)
                .map(|points| (entry.key.clone(), points))
        })
        .collect()
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub updated_at: DateTime<Utc>,
    /// Points written per symbol key, in registry order.
    pub counts: Vec<(String, usize)>,
}

/// Build the document from `source` and write it to `output`.
pub fn run(
    source: &dyn PriceSource,
    registry: &Registry,
    output: &Path,
) -> Result<RunSummary, FeedError> {
    tracing::info!(source = source.name(), symbols = registry.len(), "starting run");

    let series = collect_series(source, registry, Utc::now())?;
    let doc = ResultDocument::new(Utc::now(), series);
    write_document(&doc, output)?;

    Ok(RunSummary {
        output: output.to_path_buf(),
        updated_at: doc.updated_at,
        counts: doc
            .series
            .iter()
            .map(|(key, points)| (key.clone(), points.len()))
            .collect(),
    })
}
