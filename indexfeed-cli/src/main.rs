//! indexfeed CLI — fetch a year of daily index closes and write the dashboard JSON.
//!
//! Fetches every symbol in the compiled-in registry from Stooq, keeps the
//! last 365 days, and writes `data/markets.json` (or `--output`). Any failure
//! exits non-zero without touching the output file.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use indexfeed_core::{pipeline, FeedConfig, Registry, StooqSource};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "indexfeed",
    about = "Fetch one year of daily index closes and write them as JSON"
)]
struct Cli {
    /// TOML config file (base_url, user_agent, output, timeout_secs).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file. Defaults to data/markets.json.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Provider base URL. Defaults to https://stooq.com.
    #[arg(long)]
    base_url: Option<String>,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn resolve_config(&self) -> Result<FeedConfig> {
        let mut config = match &self.config {
            Some(path) => FeedConfig::from_file(path)?,
            None => FeedConfig::default(),
        };
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        Ok(config)
    }
}

/// `path` as an absolute location, resolved against `cwd` when relative.
fn absolute_from(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let config = cli.resolve_config()?;
    let source = StooqSource::new(&config)?;
    let registry = Registry::builtin();

    let summary = pipeline::run(&source, &registry, &config.output)
        .with_context(|| format!("run failed; {} not written", config.output.display()))?;

    for (key, count) in &summary.counts {
        tracing::info!(key = key.as_str(), points = count, "series written");
    }
    tracing::info!(updated_at = %summary.updated_at, "document stamped");

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    println!("Wrote {}", absolute_from(&cwd, &summary.output).display());
    Ok(())
}
