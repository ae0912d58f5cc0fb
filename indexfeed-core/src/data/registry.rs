//! Symbol registry: ordered short keys mapped to provider tickers.
//!
//! The built-in registry is compiled in. Order matters: symbols are fetched
//! and written in registry order.

use super::provider::FeedError;
use crate::document::UPDATED_AT_KEY;

/// One registry entry, e.g. `spx` → `^spx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub key: String,
    pub ticker: String,
}

/// The set of indices a run fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<SymbolEntry>,
}

impl Registry {
    /// The compiled-in index set: S&P 500 and Dow Jones Industrial Average.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                SymbolEntry {
                    key: "spx".into(),
                    ticker: "^spx".into(),
                },
                SymbolEntry {
                    key: "dji".into(),
                    ticker: "^dji".into(),
                },
            ],
        }
    }

    /// Build a registry from `(key, ticker)` pairs.
    ///
    /// Keys must be non-empty, unique, and must not collide with the
    /// document's `updatedAt` field.
    pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Result<Self, FeedError>
    where
        K: Into<String>,
        T: Into<String>,
    {
        let mut entries: Vec<SymbolEntry> = Vec::new();
        for (key, ticker) in pairs {
            let key = key.into();
            if key.is_empty() || key == UPDATED_AT_KEY {
                return Err(FeedError::Config(format!("invalid registry key '{key}'")));
            }
            if entries.iter().any(|e| e.key == key) {
                return Err(FeedError::Config(format!("duplicate registry key '{key}'")));
            }
            entries.push(SymbolEntry {
                key,
                ticker: ticker.into(),
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
