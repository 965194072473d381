//! Accent color selector
//!
//! Has no watched attributes. A click on a swatch writes the accent
//! variables into the shared theme, marks the swatch selected and announces
//! the choice.

use crate::constants::TAG_ACCENT_SELECTOR;
use crate::ui::core::{
    Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope, WidgetEvent,
};
use crate::utils::color::AccentColor;
use crate::utils::html::scoped;

/// Class prefix of each swatch; the palette name follows it
pub const PART_PREFIX: &str = "color-";

const STYLES: &str = r#"
:host {
  display: block;
}

.color-selector {
  display: flex;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.color-button {
  width: 3rem;
  height: 3rem;
  border-radius: 0.75rem;
  border: 2px solid transparent;
  cursor: pointer;
  transition: all 0.2s ease-in-out;
  position: relative;
}

.color-button:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.color-button.selected {
  border-color: var(--color-text-primary, #333333);
  transform: translateY(-2px);
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
}

.color-button.selected::after {
  content: "✓";
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
  color: var(--color-text-primary, #333333);
  font-size: 1.25rem;
  font-weight: bold;
}
"#;

/// Part name of the swatch for `color`
pub fn swatch_part(color: AccentColor) -> &'static str {
    match color {
        AccentColor::Blue => "color-blue",
        AccentColor::Beige => "color-beige",
        AccentColor::Orange => "color-orange",
        AccentColor::Pink => "color-pink",
        AccentColor::Yellow => "color-yellow",
        AccentColor::Cyan => "color-cyan",
    }
}

#[derive(Debug, Clone, Default)]
pub struct AccentColorSelector {
    selected: Option<AccentColor>,
}

impl AccentColorSelector {
    pub fn selected(&self) -> Option<AccentColor> {
        self.selected
    }
}

impl Component for AccentColorSelector {
    fn tag(&self) -> &'static str {
        TAG_ACCENT_SELECTOR
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    fn render(&self, _attrs: &Attributes, _ctx: &HostContext) -> String {
        let buttons: Vec<String> = AccentColor::ALL
            .into_iter()
            .map(|color| {
                let selected = if self.selected == Some(color) { " selected" } else { "" };
                format!(
                    r#"  <button class="color-button {part}{selected}" data-color="{name}" style="background-color: {hex};" aria-label="Select {name} accent color"></button>"#,
                    part = swatch_part(color),
                    name = color.name(),
                    hex = color.hex(),
                )
            })
            .collect();

        let markup = format!("<div class=\"color-selector\">\n{}\n</div>", buttons.join("\n"));
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        for color in AccentColor::ALL {
            scope.bind(swatch_part(color), InteractionKind::Click);
        }
    }

    fn handle(&mut self, part: &str, _interaction: &Interaction, _attrs: &Attributes, ctx: &HostContext) -> Reaction {
        let Some(color) = part.strip_prefix(PART_PREFIX).and_then(AccentColor::from_name) else {
            return Reaction::none();
        };

        ctx.theme.set_accent(color);
        self.selected = Some(color);

        Reaction::none().repaint().emit(WidgetEvent::AccentColorChange {
            name: color.name().to_string(),
            value: color.hex().to_string(),
        })
    }

    fn reset_display_state(&mut self) {
        self.selected = None;
    }
}
