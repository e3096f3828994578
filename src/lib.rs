//! Background Paint Checker Library
//!
//! Decides whether an element's background is a flat color, safe for exact
//! contrast-ratio arithmetic, or an image/gradient that makes automated contrast
//! computation unreliable, and records the uncertainty in a per-run ledger that
//! downstream contrast checks consult.
//!
//! # Module Overview
//!
//! - [`color`] - Graphical-element classifier, `background-image` parser, incomplete-data ledger
//! - [`element`] - The [`Element`] capability (tag name + computed style lookup)
//! - [`types`] - DOM snapshot types implementing [`Element`]
//! - [`snapshot`] - Loading snapshots from JSON/YAML files
//! - [`audit`] - One audit run over a snapshot
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```
//! use bgpaint_lib::{element_has_background_image_or_gradient, IncompleteData};
//! use bgpaint_lib::{IncompleteDataLedger, StyledElement, BG_COLOR};
//!
//! let mut ledger = IncompleteDataLedger::new();
//! let banner = StyledElement::new("div")
//!     .with_property("background-image", "linear-gradient(red, orange)");
//!
//! assert!(element_has_background_image_or_gradient(&banner, &mut ledger));
//! assert_eq!(ledger.get(BG_COLOR), Some("bgGradient"));
//! ```

pub mod audit;
pub mod color;
pub mod config;
pub mod element;
pub mod error;
pub mod output;
pub mod snapshot;
pub mod types;

pub use audit::{
    parse_ignore_selectors, run_audit, run_audit_with, AuditOptions, AuditReport,
    IncompleteFinding,
};
pub use color::{
    assess_background, check_background, classify_background_paint,
    element_has_background_image_or_gradient, inspect_background_paint, is_graphical_element,
    BackgroundAssessment, GraphicalElement, IncompleteData, IncompleteDataLedger,
    IncompleteReason, PaintClassification, PaintSource, BG_COLOR,
};
pub use config::Config;
pub use element::{Element, StyledElement, BACKGROUND_IMAGE};
pub use error::{BgpaintError, Result};
pub use output::{
    AuditFinding, AuditOutput, BgpaintOutput, ClassifyOutput, ErrorOutput, FindingSeverity,
    BGPAINT_OUTPUT_VERSION,
};
pub use snapshot::{load_snapshot, SnapshotFormat, SnapshotLoadError};
pub use types::{ComputedStyle, DomNode, DomSnapshot};
