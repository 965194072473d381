//! shadekit - Themed, style-encapsulated UI widgets
//!
//! This library renders a small set of web components (buttons, cards,
//! inputs, modals, toggles, avatars, an accent selector and article cards)
//! to HTML with declarative shadow roots. Each widget re-renders from its
//! attributes, reads theme variables from a shared store and reports user
//! interactions as events to its host.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Configuration file loading and validation
//! * [`theme`] - Shared theme variable store
//! * [`ui`] - Component runtime, widgets, document and page rendering
//! * [`utils`] - Relative time, initials, colors and markup helpers

/// Configuration module for managing library and CLI settings
pub mod config;

/// Tag names, event names and attribute defaults
pub mod constants;

/// Error types for host-facing operations
pub mod error;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Theme variables shared by every widget of a document
pub mod theme;

/// Components, documents and rendering
pub mod ui;

/// Utility functions for time formatting, initials and markup
pub mod utils;

pub use error::WidgetError;
pub use theme::ThemeContext;
pub use ui::core::{Component, Element, ElementId, HostContext, Interaction, WidgetEvent};
pub use ui::{Document, Widget};
