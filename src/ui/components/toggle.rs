//! Toggle switch component

use crate::constants::TAG_TOGGLE;
use crate::ui::core::{
    Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope, WidgetEvent,
};
use crate::utils::html::{escape, scoped};

pub const PART_WRAPPER: &str = "toggle-wrapper";
pub const PART_LABEL: &str = "toggle-label";

const STYLES: &str = r#"
:host {
  display: inline-block;
}

.toggle-container {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.toggle-wrapper {
  position: relative;
  width: 3rem;
  height: 1.5rem;
  cursor: pointer;
  outline: none;
}

.toggle-wrapper:focus-visible {
  outline: 2px solid #90CAF9;
  outline-offset: 2px;
  border-radius: 1.5rem;
}

.toggle-input {
  position: absolute;
  opacity: 0;
  width: 0;
  height: 0;
}

.toggle-slider {
  position: absolute;
  cursor: pointer;
  top: 0;
  left: 0;
  right: 0;
  bottom: 0;
  background-color: #E0E0E0;
  transition: .15s;
  border-radius: 1.5rem;
}

.toggle-slider:before {
  position: absolute;
  content: "";
  height: 1.25rem;
  width: 1.25rem;
  left: 0.125rem;
  bottom: 0.125rem;
  background-color: white;
  transition: .15s;
  border-radius: 50%;
}

.toggle-slider.checked {
  background-color: var(--color-accent, #90CAF9);
}

.toggle-slider.checked:before {
  transform: translateX(1.5rem);
}

.toggle-wrapper.disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.toggle-wrapper.disabled .toggle-slider {
  cursor: not-allowed;
}

label {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  color: #333;
  cursor: pointer;
  user-select: none;
}

label.disabled {
  cursor: not-allowed;
}
"#;

/// On/off switch backed by the `checked` presence flag
#[derive(Debug, Clone, Default)]
pub struct Toggle;

impl Toggle {
    fn flip(attrs: &Attributes) -> Reaction {
        let checked = !attrs.has("checked");
        let reaction = if checked {
            Reaction::none().set("checked", "")
        } else {
            Reaction::none().remove("checked")
        };
        reaction.emit(WidgetEvent::Change { checked })
    }
}

impl Component for Toggle {
    fn tag(&self) -> &'static str {
        TAG_TOGGLE
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["checked", "disabled", "label"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let label = escape(attrs.text("label"));
        let checked = attrs.has("checked");
        let disabled = attrs.has("disabled");

        let label_markup = if label.is_empty() {
            String::new()
        } else {
            let class = if disabled { " disabled" } else { "" };
            format!(r#"<label class="{PART_LABEL}{class}">{label}</label>"#)
        };

        let markup = format!(
            r#"<div class="toggle-container">
  {label_markup}
  <div class="{PART_WRAPPER}{wrapper_state}" tabindex="{tabindex}" role="switch" aria-checked="{checked}">
    <input type="checkbox" class="toggle-input" aria-label="{label}"{input_checked}{input_disabled} />
    <span class="toggle-slider{slider_state}"></span>
  </div>
</div>"#,
            wrapper_state = if disabled { " disabled" } else { "" },
            tabindex = if disabled { "-1" } else { "0" },
            input_checked = if checked { " checked" } else { "" },
            input_disabled = if disabled { " disabled" } else { "" },
            slider_state = if checked { " checked" } else { "" },
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_WRAPPER, InteractionKind::Click);
        scope.bind(PART_WRAPPER, InteractionKind::KeyDown);
        // Only present when a label is set
        scope.bind(PART_LABEL, InteractionKind::Click);
    }

    fn handle(&mut self, part: &str, interaction: &Interaction, attrs: &Attributes, _ctx: &HostContext) -> Reaction {
        if attrs.has("disabled") {
            return Reaction::none();
        }

        match (part, interaction.kind) {
            (PART_WRAPPER | PART_LABEL, InteractionKind::Click) => Self::flip(attrs).stop_propagation(),
            (PART_WRAPPER, InteractionKind::KeyDown) if matches!(interaction.data(), "Enter" | " ") => {
                Self::flip(attrs)
            }
            _ => Reaction::none(),
        }
    }
}
