//! Data types shared by the library and the CLI.

pub mod core;
pub mod dom;

pub use self::core::BoundingBox;
pub use self::dom::{ComputedStyle, DomNode, DomSnapshot};
