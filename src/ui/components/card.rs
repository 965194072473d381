//! Card container component

use crate::constants::{DEFAULT_CARD_ELEVATION, DEFAULT_CARD_PADDING, TAG_CARD};
use crate::ui::core::{Attributes, Component, HostContext};
use crate::utils::html::{escape, scoped};

const STYLES: &str = r#"
:host {
  display: block;
}

.card {
  background-color: var(--color-bg-primary, #FFFFFF);
  border-radius: 1rem;
  overflow: hidden;
  transition: all 0.2s ease-in-out;
}

/* Elevation variants */
.card--low {
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.05);
}

.card--medium {
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.card--high {
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

/* Dark mode shadows */
:host-context([data-theme="dark"]) .card--low {
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}

:host-context([data-theme="dark"]) .card--medium {
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
}

:host-context([data-theme="dark"]) .card--high {
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
}

/* Padding variants */
.card--padding-small {
  padding: 0.75rem;
}

.card--padding-medium {
  padding: 1.5rem;
}

.card--padding-large {
  padding: 2rem;
}

::slotted(*) {
  margin: 0;
}

::slotted(h1), ::slotted(h2), ::slotted(h3), ::slotted(h4), ::slotted(h5), ::slotted(h6) {
  font-family: 'DM Sans', sans-serif;
  color: var(--color-text-primary, #333333);
  margin-bottom: 1rem;
  transition: color 0.3s ease;
}

::slotted(p) {
  font-family: 'DM Sans', sans-serif;
  color: var(--color-text-secondary, #666666);
  line-height: 1.5;
  margin-bottom: 1rem;
  transition: color 0.3s ease;
}
"#;

#[derive(Debug, Clone, Default)]
pub struct Card;

impl Component for Card {
    fn tag(&self) -> &'static str {
        TAG_CARD
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["elevation", "padding"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let elevation = escape(attrs.get_or("elevation", DEFAULT_CARD_ELEVATION));
        let padding = escape(attrs.get_or("padding", DEFAULT_CARD_PADDING));

        let markup = format!(
            r#"<div class="card card--{elevation} card--padding-{padding}">
  <slot></slot>
</div>"#
        );
        scoped(STYLES, &markup)
    }
}
