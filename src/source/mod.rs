//! Resource data sources.
//!
//! The engine is agnostic to where descriptions come from; it only
//! requires a `Vec<ResourceDescription>`. The mock source reads a
//! static JSON snapshot; the live AWS source is not implemented.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AuditError, Result};
use crate::model::ResourceDescription;

/// Where resource descriptions come from. Mode is a constructor
/// parameter of the source, never process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Read a static JSON snapshot from disk.
    Mock,
    /// Query the live AWS API (unimplemented).
    Live,
}

/// Shape of the mock data document.
#[derive(Debug, Deserialize)]
struct BucketDocument {
    #[serde(default)]
    buckets: Vec<ResourceDescription>,
}

/// Supplies S3 resource descriptions for a scan.
pub struct S3DataSource {
    mode: SourceMode,
    data_path: PathBuf,
}

impl S3DataSource {
    pub fn new(mode: SourceMode, data_path: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            data_path: data_path.into(),
        }
    }

    /// Load all resource descriptions.
    ///
    /// An unreadable or unparseable data file is fatal: an empty result
    /// would be indistinguishable from a clean scan.
    pub fn load(&self) -> Result<Vec<ResourceDescription>> {
        match self.mode {
            SourceMode::Mock => self.load_mock(&self.data_path),
            SourceMode::Live => Err(AuditError::LiveModeUnsupported),
        }
    }

    fn load_mock(&self, path: &Path) -> Result<Vec<ResourceDescription>> {
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::DataSource {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let document: BucketDocument =
            serde_json::from_str(&content).map_err(|e| AuditError::DataSource {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        tracing::info!(
            path = %path.display(),
            buckets = document.buckets.len(),
            "loaded mock resource data"
        );
        Ok(document.buckets)
    }
}
