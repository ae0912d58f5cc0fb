//! indexfeed core — fetches daily index closes and builds the dashboard document.
//!
//! - Compiled-in symbol registry (key → provider ticker)
//! - Stooq CSV source behind the `PriceSource` trait
//! - CSV parsing into sorted `{t, c}` points, tolerant of malformed rows
//! - Rolling 365-day window
//! - Result document serialization and the single output write

pub mod config;
pub mod data;
pub mod document;
pub mod pipeline;

pub use config::FeedConfig;
pub use data::{FeedError, PricePoint, PriceSource, Registry, StooqSource};
pub use document::{write_document, ResultDocument};
pub use pipeline::{run, RunSummary};
