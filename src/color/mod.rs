//! Background paint classification for contrast checks.
//!
//! - [`graphical`] - tags whose content is inherently graphical
//! - [`paint`] - `background-image` layer parsing
//! - [`incomplete_data`] - per-run ledger of uncertain results
//! - [`background`] - the entry point tying them together

pub mod background;
pub mod graphical;
pub mod incomplete_data;
pub mod paint;

pub use background::{
    assess_background, check_background, element_has_background_image_or_gradient,
    BackgroundAssessment, PaintSource,
};
pub use graphical::{is_graphical_element, GraphicalElement};
pub use incomplete_data::{IncompleteData, IncompleteDataLedger, IncompleteReason, BG_COLOR};
pub use paint::{
    classify_background_paint, inspect_background_paint, split_layers, PaintClassification,
    PaintInspection,
};
