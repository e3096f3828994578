//! Element types whose rendered content is graphical regardless of CSS background.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tags treated as an opaque image-like paint without inspecting their styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicalElement {
    Img,
    Canvas,
    Object,
    Iframe,
    Video,
    Svg,
}

impl GraphicalElement {
    pub const ALL: [GraphicalElement; 6] = [
        GraphicalElement::Img,
        GraphicalElement::Canvas,
        GraphicalElement::Object,
        GraphicalElement::Iframe,
        GraphicalElement::Video,
        GraphicalElement::Svg,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GraphicalElement::Img => "img",
            GraphicalElement::Canvas => "canvas",
            GraphicalElement::Object => "object",
            GraphicalElement::Iframe => "iframe",
            GraphicalElement::Video => "video",
            GraphicalElement::Svg => "svg",
        }
    }

    /// Look up a tag name, ignoring ASCII case.
    pub fn from_tag_name(tag_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(tag_name))
    }
}

impl fmt::Display for GraphicalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true when the tag's content is inherently non-flat (`img`, `canvas`, `video`, ...).
pub fn is_graphical_element(tag_name: &str) -> bool {
    GraphicalElement::from_tag_name(tag_name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_graphical_tag() {
        for tag in ["img", "canvas", "object", "iframe", "video", "svg"] {
            assert!(is_graphical_element(tag), "{tag} should be graphical");
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert!(is_graphical_element("IMG"));
        assert!(is_graphical_element("Canvas"));
        assert!(is_graphical_element("sVg"));
        assert_eq!(
            GraphicalElement::from_tag_name("IFRAME"),
            Some(GraphicalElement::Iframe)
        );
    }

    #[test]
    fn rejects_text_and_container_tags() {
        for tag in ["div", "span", "p", "picture", "image", "", " img"] {
            assert!(!is_graphical_element(tag), "{tag:?} should not be graphical");
        }
    }

    #[test]
    fn display_uses_lowercase_tag() {
        assert_eq!(GraphicalElement::Video.to_string(), "video");
    }
}
