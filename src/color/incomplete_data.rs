//! Ledger of checks whose result is uncertain, keyed by check name.
//!
//! Contrast checks consult this after background classification: a present
//! [`BG_COLOR`] entry means the computed ratio must be reported as indeterminate
//! rather than pass/fail. A ledger lives for one audit run and is passed
//! explicitly to whatever writes or reads it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ledger key for the background-color contrast input.
pub const BG_COLOR: &str = "bgColor";

/// Why the background color of an element could not be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncompleteReason {
    /// Background painted by an image, or the element itself is graphical
    BgImage,
    /// Background painted by a gradient
    BgGradient,
}

impl IncompleteReason {
    pub fn as_str(self) -> &'static str {
        match self {
            IncompleteReason::BgImage => "bgImage",
            IncompleteReason::BgGradient => "bgGradient",
        }
    }
}

impl fmt::Display for IncompleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key -> reason store with last-write-wins semantics.
pub trait IncompleteData {
    /// Store `reason` under `key`, replacing any previous entry, and return the stored value.
    fn set(&mut self, key: &str, reason: &str) -> &str;

    fn get(&self, key: &str) -> Option<&str>;
}

/// Default in-memory ledger for a single audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncompleteDataLedger {
    entries: BTreeMap<String, String>,
}

impl IncompleteDataLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry; called when a new run begins.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IncompleteData for IncompleteDataLedger {
    fn set(&mut self, key: &str, reason: &str) -> &str {
        let slot = self.entries.entry(key.to_owned()).or_default();
        *slot = reason.to_owned();
        slot.as_str()
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
