//! UI module for shadekit
//!
//! This module holds the component runtime, the widget kinds built on it, the
//! document that owns live elements and the page renderer.

pub mod components;
pub mod core;
pub mod document;
pub mod renderer;

pub use components::Widget;
pub use document::Document;
pub use renderer::{gallery, render_page};
