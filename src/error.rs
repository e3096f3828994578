use crate::config::ConfigError;
use crate::snapshot::SnapshotLoadError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BgpaintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Audit error: {0}")]
    Audit(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl BgpaintError {
    pub fn audit(message: impl Into<String>) -> Self {
        BgpaintError::Audit(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            BgpaintError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            BgpaintError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check JSON/serialization inputs; run with --verbose for details.",
            ),
            BgpaintError::Snapshot(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("file not found") {
                    ErrorPayload::new(
                        ErrorCategory::Snapshot,
                        msg.to_string(),
                        "Verify the snapshot exists; use an absolute path or run from the working directory.",
                    )
                } else if lower.contains("unsupported file extension") {
                    ErrorPayload::new(
                        ErrorCategory::Snapshot,
                        msg.to_string(),
                        "Save the DOM snapshot as .json, .yaml or .yml.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Snapshot,
                        msg.to_string(),
                        "Check the snapshot shape: {\"nodes\": [{\"id\", \"tag\", \"computedStyle\"}]}.",
                    )
                }
            }
            BgpaintError::Audit(msg) => ErrorPayload::new(
                ErrorCategory::Audit,
                msg.to_string(),
                "Every snapshot node needs a non-empty tag name; fix the capture and rerun.",
            ),
            BgpaintError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("selector") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use simple selectors only: #id, .class or a tag name, without spaces or combinators.",
                    )
                } else if lower.contains("unknown field") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Supported [audit] keys: skip_hidden, text_only, fail_on_incomplete, ignore_selectors.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the TOML config file.",
                    )
                }
            }
            BgpaintError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

impl From<SnapshotLoadError> for BgpaintError {
    fn from(err: SnapshotLoadError) -> Self {
        match err {
            SnapshotLoadError::Io(e) => BgpaintError::Io(e),
            other => BgpaintError::Snapshot(other.to_string()),
        }
    }
}

impl From<ConfigError> for BgpaintError {
    fn from(err: ConfigError) -> Self {
        BgpaintError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BgpaintError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Snapshot,
    Audit,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
