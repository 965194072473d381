//! Utility modules for shadekit.
//!
//! This module contains the small, pure helpers the widgets share. None of
//! them touch component state; they only transform strings.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Relative "time ago" formatting with verbose and compact styles
//! - [`initials`] - Avatar placeholder labels derived from display names
//! - [`color`] - Accent palette lookup
//! - [`html`] - Escaping and scoped style/markup assembly

pub mod color;
pub mod datetime;
pub mod html;
pub mod initials;
