//! Button component

use crate::constants::{DEFAULT_BUTTON_VARIANT, TAG_BUTTON};
use crate::ui::core::{Attributes, Component, HostContext};
use crate::utils::html::{escape, scoped};

const STYLES: &str = r#"
:host {
  display: inline-block;
}

.button {
  font-family: 'DM Sans', sans-serif;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font-weight: 500;
  cursor: pointer;
  transition: all 0.2s ease-in-out;
  border: none;
  outline: none;
}

.button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.button--primary {
  background-color: var(--color-accent, #90CAF9);
  color: var(--color-text-primary, #333333);
}

.button--primary:hover:not(:disabled) {
  background-color: color-mix(in srgb, var(--color-accent, #90CAF9) 80%, black);
}

.button--secondary {
  background-color: var(--color-secondary, #F48FB1);
  color: var(--color-text-primary, #333333);
}

.button--secondary:hover:not(:disabled) {
  background-color: var(--color-secondary-dark, #EC407A);
}

.button--ghost {
  background-color: transparent;
  border: 1px solid var(--color-border, #E0E0E0);
  color: var(--color-text-primary, #333333);
}

.button--ghost:hover:not(:disabled) {
  background-color: var(--color-bg-secondary, #FAFAFA);
}
"#;

/// Slotted button with `primary`, `secondary` and `ghost` variants
#[derive(Debug, Clone, Default)]
pub struct Button;

impl Component for Button {
    fn tag(&self) -> &'static str {
        TAG_BUTTON
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["variant", "disabled"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let variant = escape(attrs.get_or("variant", DEFAULT_BUTTON_VARIANT));
        let disabled = if attrs.has("disabled") { " disabled" } else { "" };

        let markup = format!(
            r#"<button class="button button--{variant}"{disabled}>
  <slot></slot>
</button>"#
        );
        scoped(STYLES, &markup)
    }
}
