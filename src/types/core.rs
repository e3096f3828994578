//! Core geometry types.

use serde::{Deserialize, Serialize};

/// Rectangle bounds for an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// True when the box covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::BoundingBox;

    #[test]
    fn zero_sized_box_is_empty() {
        let bbox = BoundingBox {
            x: 10.0,
            y: 10.0,
            width: 0.0,
            height: 40.0,
        };
        assert!(bbox.is_empty());
        assert!(BoundingBox::default().is_empty());
    }

    #[test]
    fn deserializes_from_camel_case() {
        let bbox: BoundingBox =
            serde_json::from_str(r#"{"x":0,"y":0,"width":30,"height":40}"#).unwrap();
        assert!(!bbox.is_empty());
        assert_eq!(bbox.height, 40.0);
    }
}
