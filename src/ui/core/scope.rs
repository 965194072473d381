use crate::utils::html;

use super::actions::InteractionKind;

/// A listener bound to one part of the rendered markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub part: &'static str,
    pub kind: InteractionKind,
}

/// An element's encapsulated rendering scope
///
/// Holds the element's private markup and the listeners bound to it.
/// Replacing the markup discards every listener; they belong to the nodes
/// that were just thrown away.
#[derive(Debug, Clone, Default)]
pub struct RenderScope {
    markup: String,
    listeners: Vec<Listener>,
}

impl RenderScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn replace(&mut self, markup: String) {
        self.markup = markup;
        self.listeners.clear();
    }

    /// Whether the current markup contains an element carrying class `part`
    pub fn has_part(&self, part: &str) -> bool {
        html::class_tokens(&self.markup).any(|token| token == part)
    }

    /// Bind a listener; parts missing from the markup are skipped
    ///
    /// Returns whether a listener is bound afterwards. Binding the same
    /// listener twice keeps a single binding.
    pub fn bind(&mut self, part: &'static str, kind: InteractionKind) -> bool {
        if !self.has_part(part) {
            log::trace!("no '{}' part to bind {:?} on", part, kind);
            return false;
        }
        let listener = Listener { part, kind };
        if !self.listeners.contains(&listener) {
            self.listeners.push(listener);
        }
        true
    }

    pub fn is_bound(&self, part: &str, kind: InteractionKind) -> bool {
        self.listeners
            .iter()
            .any(|listener| listener.part == part && listener.kind == kind)
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn clear(&mut self) {
        self.markup.clear();
        self.listeners.clear();
    }
}
