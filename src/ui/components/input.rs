//! Labelled text input component

use crate::constants::{DEFAULT_INPUT_TYPE, TAG_INPUT};
use crate::ui::core::{
    Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope, WidgetEvent,
};
use crate::utils::html::{escape, scoped};

pub const PART_FIELD: &str = "input-field";

const STYLES: &str = r#"
:host {
  display: block;
}

.input-container {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

label {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  color: var(--color-text-primary, #333333);
  font-weight: 500;
  transition: color 0.3s ease;
}

input {
  font-family: 'DM Sans', sans-serif;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  border: 1px solid var(--color-border, #E0E0E0);
  background-color: var(--color-bg-primary, #FFFFFF);
  color: var(--color-text-primary, #333333);
  outline: none;
  transition: all 0.2s ease-in-out;
  font-size: 1rem;
}

input:focus {
  border-color: var(--color-primary, #90CAF9);
  box-shadow: 0 0 0 2px var(--color-primary-light, #E3F2FD);
}

input:disabled {
  background-color: var(--color-bg-secondary, #FAFAFA);
  cursor: not-allowed;
  opacity: 0.7;
}

input::placeholder {
  color: var(--color-text-secondary, #666666);
}
"#;

#[derive(Debug, Clone, Default)]
pub struct Input;

impl Component for Input {
    fn tag(&self) -> &'static str {
        TAG_INPUT
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["type", "placeholder", "value", "disabled", "label"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let label = attrs.text("label");
        let label = if label.is_empty() {
            String::new()
        } else {
            format!("<label>{}</label>", escape(label))
        };
        let disabled = if attrs.has("disabled") { " disabled" } else { "" };

        let markup = format!(
            r#"<div class="input-container">
  {label}
  <input class="{PART_FIELD}" type="{kind}" placeholder="{placeholder}" value="{value}"{disabled} />
</div>"#,
            kind = escape(attrs.get_or("type", DEFAULT_INPUT_TYPE)),
            placeholder = escape(attrs.text("placeholder")),
            value = escape(attrs.text("value")),
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_FIELD, InteractionKind::Input);
    }

    fn handle(&mut self, part: &str, interaction: &Interaction, attrs: &Attributes, _ctx: &HostContext) -> Reaction {
        // A disabled field accepts no input.
        if part != PART_FIELD || attrs.has("disabled") {
            return Reaction::none();
        }

        let value = interaction.data();
        Reaction::none().set("value", value).emit(WidgetEvent::Input {
            value: value.to_string(),
        })
    }
}
