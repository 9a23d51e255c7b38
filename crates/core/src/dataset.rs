//! Read-only problem dataset sources.
//!
//! The service and the viewer both depend on [`ProblemSource`] rather than a
//! global dataset, so tests can swap in fixtures. The bundled dataset in
//! `data/problems.json` is compiled into every binary and doubles as the
//! viewer's fallback copy.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::problem::ProblemRecord;

/// The dataset shipped with the workspace, as raw JSON.
pub const BUNDLED_DATASET: &str = include_str!("../data/problems.json");

/// Anything that can produce an ordered snapshot of problem records.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Load a fresh snapshot. Implementations must not cache failures.
    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError>;
}

/// Parse a dataset document and check its invariants.
///
/// The document must be a JSON array of records, every record must have its
/// required fields populated, and ids must be unique.
pub fn parse_dataset(raw: &str) -> Result<Vec<ProblemRecord>, CoreError> {
    let records: Vec<ProblemRecord> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        record.validate().map_err(|e| {
            CoreError::InvalidDataset(format!("record {}: {e}", record.id))
        })?;
        if !seen.insert(record.id) {
            return Err(CoreError::InvalidDataset(format!(
                "duplicate id {}",
                record.id
            )));
        }
    }

    Ok(records)
}

/// Parse [`BUNDLED_DATASET`].
pub fn bundled_problems() -> Result<Vec<ProblemRecord>, CoreError> {
    parse_dataset(BUNDLED_DATASET)
}

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Serves the dataset compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledSource;

#[async_trait]
impl ProblemSource for BundledSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError> {
        bundled_problems()
    }
}

/// Re-reads a JSON file on every load, so edits are picked up without a
/// restart and a broken file surfaces as a load error on that request.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProblemSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_dataset(&raw)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "Loaded dataset file");
        Ok(records)
    }
}

/// A fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ProblemRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ProblemRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl ProblemSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Vec<ProblemRecord>, CoreError> {
        Ok(self.records.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
