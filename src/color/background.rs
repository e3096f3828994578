//! Entry point deciding whether an element's background defeats contrast math.

use serde::{Deserialize, Serialize};

use super::graphical::GraphicalElement;
use super::incomplete_data::{IncompleteData, BG_COLOR};
use super::paint::{inspect_background_paint, PaintClassification};
use crate::element::{Element, BACKGROUND_IMAGE};

/// Where a complex paint was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintSource {
    /// The element type itself renders graphical content
    GraphicalElement,
    /// A `background-image` layer paints an image or gradient
    BackgroundImage,
}

/// Outcome of classifying one element's background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundAssessment {
    pub classification: PaintClassification,
    /// Set when the graphical-element short-circuit fired
    pub graphical: Option<GraphicalElement>,
    /// Deciding `background-image` layer, original casing
    pub layer: Option<String>,
}

impl BackgroundAssessment {
    pub fn is_complex(&self) -> bool {
        self.classification.is_complex()
    }

    pub fn source(&self) -> Option<PaintSource> {
        if self.graphical.is_some() {
            Some(PaintSource::GraphicalElement)
        } else if self.is_complex() {
            Some(PaintSource::BackgroundImage)
        } else {
            None
        }
    }
}

/// Classify an element's background without touching any ledger.
///
/// Graphical elements are treated as an image paint and their styles are not read.
pub fn assess_background<E: Element + ?Sized>(element: &E) -> BackgroundAssessment {
    if let Some(kind) = GraphicalElement::from_tag_name(element.tag_name()) {
        return BackgroundAssessment {
            classification: PaintClassification::Image,
            graphical: Some(kind),
            layer: None,
        };
    }

    let value = element
        .computed_property(BACKGROUND_IMAGE)
        .unwrap_or_default();
    let inspection = inspect_background_paint(&value);
    BackgroundAssessment {
        classification: inspection.classification,
        graphical: None,
        layer: inspection.layer.map(str::to_owned),
    }
}

/// Classify an element's background and record any uncertainty under [`BG_COLOR`].
///
/// Flat backgrounds write nothing, so entries left by earlier elements survive.
pub fn check_background<E, L>(element: &E, incomplete: &mut L) -> BackgroundAssessment
where
    E: Element + ?Sized,
    L: IncompleteData + ?Sized,
{
    let assessment = assess_background(element);
    if let Some(reason) = assessment.classification.incomplete_reason() {
        incomplete.set(BG_COLOR, reason.as_str());
        tracing::debug!(
            tag = element.tag_name(),
            reason = reason.as_str(),
            graphical = assessment.graphical.is_some(),
            "background marks contrast as incomplete"
        );
    }
    assessment
}

/// Returns true when the element paints an image or gradient behind its content.
///
/// On `true` the ledger holds `bgColor = "bgImage"` or `bgColor = "bgGradient"`.
pub fn element_has_background_image_or_gradient<E, L>(element: &E, incomplete: &mut L) -> bool
where
    E: Element + ?Sized,
    L: IncompleteData + ?Sized,
{
    check_background(element, incomplete).is_complex()
}
