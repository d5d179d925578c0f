//! Host record sources
//!
//! The inventory engine never caches host records; every export asks its
//! source again.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{InventoryError, Result};
use crate::types::HostRecord;

/// Supplier of host records for one export
#[async_trait]
pub trait HostSource: Send + Sync {
    /// Fetch the current host records, in source order
    async fn hosts(&self) -> Result<Vec<HostRecord>>;

    /// Short name of the source, for logging
    fn source_type(&self) -> &'static str;
}

/// In-memory host records
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    hosts: Vec<HostRecord>,
}

impl StaticSource {
    /// Create a source over fixed records
    #[must_use]
    pub fn new(hosts: Vec<HostRecord>) -> Self {
        Self { hosts }
    }
}

#[async_trait]
impl HostSource for StaticSource {
    async fn hosts(&self) -> Result<Vec<HostRecord>> {
        Ok(self.hosts.clone())
    }

    fn source_type(&self) -> &'static str {
        "static"
    }
}

/// Layout of a hosts file: a list of `[[host]]` tables
///
/// An empty file holds no hosts; any other top-level key is rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HostFile {
    #[serde(default)]
    host: Vec<HostRecord>,
}

/// JSON hosts files may also be a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonHostFile {
    Table(HostFile),
    List(Vec<HostRecord>),
}

/// Host records read from a TOML or JSON file
///
/// The file is read again on every call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for a hosts file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the hosts file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse hosts file contents, picking the format from the file extension
    ///
    /// # Errors
    /// Returns an error if the extension is unknown or the contents do not parse.
    pub fn parse(path: &Path, content: &str) -> Result<Vec<HostRecord>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "toml" => {
                let file: HostFile = toml::from_str(content)
                    .map_err(|e| InventoryError::SourceParse(e.to_string()))?;
                Ok(file.host)
            }
            "json" => {
                let file: JsonHostFile = serde_json::from_str(content)
                    .map_err(|e| InventoryError::SourceParse(e.to_string()))?;
                Ok(match file {
                    JsonHostFile::Table(file) => file.host,
                    JsonHostFile::List(hosts) => hosts,
                })
            }
            other => Err(InventoryError::UnsupportedFormat(format!(
                "{} (extension {other:?})",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl HostSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn hosts(&self) -> Result<Vec<HostRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(InventoryError::SourceRead)?;
        let hosts = Self::parse(&self.path, &content)?;
        debug!(hosts = hosts.len(), "loaded hosts file");
        Ok(hosts)
    }

    fn source_type(&self) -> &'static str {
        "file"
    }
}
