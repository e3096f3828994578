//! Capability interface for elements under audit.

use std::collections::HashMap;

/// CSS property holding the element's background layers.
pub const BACKGROUND_IMAGE: &str = "background-image";

/// An element as seen by the audit: a tag name plus resolved style lookup.
pub trait Element {
    /// Tag name in any letter-case (e.g. "div", "IMG").
    fn tag_name(&self) -> &str;

    /// Resolved value of a CSS property, looked up case-insensitively.
    /// `None` when the property is not set.
    fn computed_property(&self, name: &str) -> Option<String>;
}

impl<E: Element + ?Sized> Element for &E {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        (**self).computed_property(name)
    }
}

/// Element built from a tag name and a property map, for callers without a DOM.
#[derive(Debug, Clone, Default)]
pub struct StyledElement {
    tag: String,
    properties: HashMap<String, String>,
}

impl StyledElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            properties: HashMap::new(),
        }
    }

    /// Set a resolved property; names are stored lower-cased.
    pub fn with_property(mut self, name: &str, value: impl Into<String>) -> Self {
        self.properties
            .insert(name.to_ascii_lowercase(), value.into());
        self
    }
}

impl Element for StyledElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        self.properties.get(&name.to_ascii_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_element_lookup_ignores_property_case() {
        let el = StyledElement::new("div").with_property("Background-Image", "url(a.png)");
        assert_eq!(el.tag_name(), "div");
        assert_eq!(
            el.computed_property("BACKGROUND-IMAGE").as_deref(),
            Some("url(a.png)")
        );
        assert_eq!(el.computed_property(BACKGROUND_IMAGE).as_deref(), Some("url(a.png)"));
        assert!(el.computed_property("color").is_none());
    }

    #[test]
    fn references_forward_to_the_element() {
        fn tag_of<E: Element>(el: E) -> String {
            el.tag_name().to_string()
        }
        let el = StyledElement::new("span");
        assert_eq!(tag_of(&el), "span");
    }
}
