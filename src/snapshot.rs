use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::DomSnapshot;

#[derive(Debug, Error)]
pub enum SnapshotLoadError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML snapshot: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported file extension '{0}'. Supported snapshot extensions: json, yaml, yml.")]
    UnsupportedExtension(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self, SnapshotLoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(SnapshotFormat::Json),
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            _ => Err(SnapshotLoadError::UnsupportedExtension(ext)),
        }
    }
}

/// Load a DOM snapshot, picking the parser from the file extension.
pub fn load_snapshot(path: &Path) -> Result<DomSnapshot, SnapshotLoadError> {
    if !path.exists() {
        return Err(SnapshotLoadError::NotFound(path.display().to_string()));
    }
    let format = SnapshotFormat::from_path(path)?;
    let raw = fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&raw, format)?;
    tracing::debug!(
        path = %path.display(),
        nodes = snapshot.nodes.len(),
        "loaded DOM snapshot"
    );
    Ok(snapshot)
}

pub fn parse_snapshot(raw: &str, format: SnapshotFormat) -> Result<DomSnapshot, SnapshotLoadError> {
    Ok(match format {
        SnapshotFormat::Json => serde_json::from_str(raw)?,
        SnapshotFormat::Yaml => serde_yaml::from_str(raw)?,
    })
}
