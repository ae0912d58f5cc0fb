//! Data acquisition: registry, price sources, CSV parsing, windowing

pub mod parse;
pub mod provider;
pub mod registry;
pub mod stooq;
pub mod window;

pub use parse::{parse_csv, ParsedSeries};
pub use provider::{FeedError, PricePoint, PriceSource};
pub use registry::{Registry, SymbolEntry};
pub use stooq::StooqSource;
pub use window::{keep_rolling_year, Window};
