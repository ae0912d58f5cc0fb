//! The result document and its writer.
//!
//! Serialized shape:
//!
//! ```json
//! {"updatedAt":"2026-10-19T08:00:00.000Z","spx":[{"t":...,"c":...}],"dji":[...]}
//! ```
//!
//! `updatedAt` comes first, then one array per symbol in registry order.

use crate::data::{FeedError, PricePoint};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

pub const UPDATED_AT_KEY: &str = "updatedAt";

/// Filtered series for every configured symbol, plus the generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDocument {
    pub updated_at: DateTime<Utc>,
    pub series: Vec<(String, Vec<PricePoint>)>,
}

impl ResultDocument {
    pub fn new(updated_at: DateTime<Utc>, series: Vec<(String, Vec<PricePoint>)>) -> Self {
        Self { updated_at, series }
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ResultDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len() + 1))?;
        map.serialize_entry(
            UPDATED_AT_KEY,
            &self.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        for (key, points) in &self.series {
            map.serialize_entry(key, points)?;
        }
        map.end()
    }
}

/// Write the document to `path`, creating parent directories as needed.
///
/// Any previous file at `path` is replaced. The write is not atomic.
pub fn write_document(doc: &ResultDocument, path: &Path) -> Result<(), FeedError> {
    let json = doc.to_json()?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| FeedError::Output {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json.as_bytes()).map_err(|source| FeedError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "result document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn doc() -> ResultDocument {
        ResultDocument::new(
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap(),
            vec![
                ("spx".into(), vec![PricePoint { t: 1, c: 2.5 }]),
                ("dji".into(), vec![]),
            ],
        )
    }

    #[test]
    fn serializes_updated_at_first_then_registry_order() {
        assert_eq!(
            doc().to_json().unwrap(),
            r#"{"updatedAt":"2026-10-19T08:00:00.000Z","spx":[{"t":1,"c":2.5}],"dji":[]}"#
        );
    }

    #[test]
    fn creates_nested_dirs_and_replaces_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a/b/markets.json");

        write_document(&doc(), &path).unwrap();
        std::fs::write(&path, "x".repeat(4096)).unwrap();
        write_document(&doc(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc().to_json().unwrap());
    }

    #[test]
    fn write_failure_names_path() {
        let tmp = tempfile::tempdir().unwrap();
        // A regular file where a directory is expected.
        let blocker = tmp.path().join("data");
        std::fs::write(&blocker, "").unwrap();

        let err = write_document(&doc(), &blocker.join("markets.json")).unwrap_err();
        match err {
            FeedError::Output { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected output error, got {other:?}"),
        }
    }
}
