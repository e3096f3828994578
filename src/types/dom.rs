//! DOM snapshot types for captured pages.
//!
//! These types represent the DOM structure of a rendered page, flattened into a
//! node list with resolved styles, as produced by a headless browser capture.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::core::BoundingBox;
use crate::element::Element;

/// A snapshot of a web page's DOM structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomSnapshot {
    /// The URL of the captured page
    pub url: Option<String>,
    /// The page title
    pub title: Option<String>,
    /// Flattened list of DOM nodes, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<DomNode>,
}

/// A single DOM element with its properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomNode {
    /// Unique identifier for this node
    pub id: String,
    /// HTML tag name (e.g., "div", "span", "img")
    pub tag: String,
    /// IDs of child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    /// ID of parent node
    pub parent: Option<String>,
    /// HTML attributes (id, class, data-*, etc.)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Text content
    pub text: Option<String>,
    /// Position and size on screen
    #[serde(default)]
    pub bounding_box: BoundingBox,
    /// CSS computed styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_style: Option<ComputedStyle>,
}

impl DomNode {
    /// True when the node carries non-whitespace text.
    pub fn has_text(&self) -> bool {
        self.text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }

    pub fn is_hidden(&self) -> bool {
        self.computed_style
            .as_ref()
            .is_some_and(ComputedStyle::is_hidden)
    }
}

impl Element for DomNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        self.computed_style.as_ref()?.property(name)
    }
}

/// Computed CSS styles for a DOM element.
///
/// Properties without a typed field land in `extra`, keyed as captured.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub background_image: Option<String>,
    pub display: Option<String>,
    pub visibility: Option<String>,
    pub opacity: Option<f32>,
    #[serde(flatten, default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ComputedStyle {
    /// Look up a property by CSS name (`background-image`) or camelCase name
    /// (`backgroundImage`), ignoring case.
    pub fn property(&self, name: &str) -> Option<String> {
        let key = normalize_property_name(name);
        let typed = match key.as_str() {
            "fontfamily" => self.font_family.clone(),
            "fontsize" => self.font_size.map(px),
            "fontweight" => self.font_weight.clone(),
            "lineheight" => self.line_height.map(px),
            "letterspacing" => self.letter_spacing.map(px),
            "color" => self.color.clone(),
            "backgroundcolor" => self.background_color.clone(),
            "backgroundimage" => self.background_image.clone(),
            "display" => self.display.clone(),
            "visibility" => self.visibility.clone(),
            "opacity" => self.opacity.map(|v| v.to_string()),
            _ => None,
        };
        typed.or_else(|| {
            self.extra
                .iter()
                .find(|(k, _)| normalize_property_name(k) == key)
                .and_then(|(_, v)| value_to_string(v))
        })
    }

    /// True for `display: none`, `visibility: hidden|collapse`, or zero opacity.
    pub fn is_hidden(&self) -> bool {
        let display_none = self
            .display
            .as_deref()
            .is_some_and(|d| d.trim().eq_ignore_ascii_case("none"));
        let invisible = self.visibility.as_deref().is_some_and(|v| {
            let v = v.trim();
            v.eq_ignore_ascii_case("hidden") || v.eq_ignore_ascii_case("collapse")
        });
        let transparent = self.opacity.is_some_and(|o| o <= 0.0);
        display_none || invisible || transparent
    }
}

fn normalize_property_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn px(value: f32) -> String {
    format!("{value}px")
}

fn value_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
