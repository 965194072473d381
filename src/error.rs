//! Error types for host-facing operations
//!
//! Rendering itself never fails; these errors cover a host handing the
//! document something it cannot resolve.

use crate::ui::core::ElementId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Unknown component tag: {0}")]
    UnknownTag(String),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    #[error("Unknown accent color: {0}")]
    UnknownAccentColor(String),
}
