//! Classification of resolved `background-image` values.
//!
//! A computed `background-image` is a comma-separated stack of layers. Any layer
//! that paints an image or a gradient makes flat-color contrast math unreliable,
//! so the first such layer decides the result. Unrecognized layers never raise
//! uncertainty on their own.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::incomplete_data::IncompleteReason;

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-o-", "-ms-"];
const GRADIENT_FUNCTIONS: [&str; 3] = ["linear-gradient", "radial-gradient", "conic-gradient"];

/// What a background paints underneath an element's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintClassification {
    /// Flat color only (or nothing recognizable)
    #[default]
    None,
    /// At least one `url(...)` layer
    Image,
    /// At least one gradient function layer
    Gradient,
}

impl PaintClassification {
    pub fn as_str(self) -> &'static str {
        match self {
            PaintClassification::None => "none",
            PaintClassification::Image => "image",
            PaintClassification::Gradient => "gradient",
        }
    }

    /// True for paints that make contrast computation unreliable.
    pub fn is_complex(self) -> bool {
        !matches!(self, PaintClassification::None)
    }

    /// Reason recorded in the incomplete-data ledger for this paint, if any.
    pub fn incomplete_reason(self) -> Option<IncompleteReason> {
        match self {
            PaintClassification::None => None,
            PaintClassification::Image => Some(IncompleteReason::BgImage),
            PaintClassification::Gradient => Some(IncompleteReason::BgGradient),
        }
    }
}

impl fmt::Display for PaintClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of inspecting a background value, keeping the deciding layer for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintInspection<'a> {
    pub classification: PaintClassification,
    /// Zero-based index of the deciding layer
    pub layer_index: Option<usize>,
    /// Deciding layer in its original casing
    pub layer: Option<&'a str>,
}

impl PaintInspection<'_> {
    fn flat() -> Self {
        Self {
            classification: PaintClassification::None,
            layer_index: None,
            layer: None,
        }
    }
}

/// Classify a resolved `background-image` value.
pub fn classify_background_paint(value: &str) -> PaintClassification {
    inspect_background_paint(value).classification
}

/// Classify a resolved `background-image` value and report which layer decided.
pub fn inspect_background_paint(value: &str) -> PaintInspection<'_> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return PaintInspection::flat();
    }

    for (index, layer) in split_layers(trimmed).into_iter().enumerate() {
        if let Some(classification) = classify_layer(layer) {
            tracing::debug!(layer = %layer, index, %classification, "background layer decides paint");
            return PaintInspection {
                classification,
                layer_index: Some(index),
                layer: Some(layer),
            };
        }
    }

    tracing::debug!(value = %value, "no image or gradient layer in background");
    PaintInspection::flat()
}

/// Split a background value on top-level commas.
///
/// Commas inside parentheses or quoted strings belong to a function argument list,
/// not to the layer list. Empty layers are dropped; layers are trimmed.
pub fn split_layers(value: &str) -> Vec<&str> {
    let mut layers = Vec::new();
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_layer(&mut layers, &value[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    push_layer(&mut layers, &value[start..]);
    layers
}

fn push_layer<'a>(layers: &mut Vec<&'a str>, raw: &'a str) {
    let layer = raw.trim();
    if !layer.is_empty() {
        layers.push(layer);
    }
}

/// Classify one layer; `None` means the layer paints nothing we recognize.
fn classify_layer(layer: &str) -> Option<PaintClassification> {
    let lower = layer.to_ascii_lowercase();
    if lower.starts_with("url(") {
        return Some(PaintClassification::Image);
    }
    let open = lower.find('(')?;
    if is_gradient_function(&lower[..open]) {
        Some(PaintClassification::Gradient)
    } else {
        None
    }
}

fn is_gradient_function(name: &str) -> bool {
    // Legacy WebKit syntax: -webkit-gradient(linear, ...)
    if name == "-webkit-gradient" {
        return true;
    }
    let base = VENDOR_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);
    let base = base.strip_prefix("repeating-").unwrap_or(base);
    GRADIENT_FUNCTIONS.contains(&base)
}
