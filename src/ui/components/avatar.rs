//! Avatar component
//!
//! Square, circle and pill variants. The pill variant expands on click to
//! reveal the name; that expansion is display state only and collapses again
//! whenever an attribute change re-renders the avatar.

use crate::constants::{DEFAULT_AVATAR_DIRECTION, DEFAULT_AVATAR_SIZE, DEFAULT_AVATAR_VARIANT, TAG_AVATAR};
use crate::ui::core::{Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope};
use crate::utils::html::{escape, scoped};
use crate::utils::initials::initials;

pub const PART_PILL: &str = "avatar--pill";

const STYLES: &str = r#"
:host {
  display: inline-block;
}

.avatar {
  display: flex;
  align-items: center;
  font-family: 'DM Sans', sans-serif;
  transition: all 0.2s ease-in-out;
}

.avatar-image {
  background-color: var(--color-accent, #90CAF9);
  color: var(--color-text-primary, #FFFFFF);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 500;
  overflow: hidden;
  position: relative;
  z-index: 2;
}

.avatar-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Square variant */
.avatar--square .avatar-image {
  border-radius: 0.75rem;
}

/* Circle variant */
.avatar--circle .avatar-image {
  border-radius: 50%;
}

/* Pill variants */
.avatar--pill {
  background-color: var(--color-bg-primary, #FFFFFF);
  border: 1px solid var(--color-border, #E0E0E0);
  border-radius: 100px;
  cursor: pointer;
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  position: relative;
}

.avatar--pill .avatar-image {
  border-radius: 50%;
  flex-shrink: 0;
}

.avatar--pill .avatar-name {
  color: var(--color-text-primary, #333333);
  font-weight: 500;
  transition: opacity 0.3s cubic-bezier(0.4, 0, 0.2, 1),
              max-width 0.3s cubic-bezier(0.4, 0, 0.2, 1),
              max-height 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  white-space: nowrap;
  overflow: hidden;
}

/* Horizontal pill */
.avatar--pill.horizontal {
  width: var(--avatar-size);
  height: var(--avatar-size);
  padding: var(--avatar-padding);
}

.avatar--pill.horizontal .avatar-image {
  position: absolute;
  left: 50%;
  top: 50%;
  transform: translate(-50%, -50%);
}

.avatar--pill.horizontal .avatar-name {
  max-width: 0;
  opacity: 0;
  padding: 0;
  margin-left: 0.75rem;
}

.avatar--pill.horizontal.expanded {
  width: auto;
  max-width: 200px;
  padding-right: 1.25rem;
}

.avatar--pill.horizontal.expanded .avatar-image {
  position: relative;
  left: 0;
  top: 0;
  transform: none;
  margin-left: var(--avatar-padding);
}

.avatar--pill.horizontal.expanded .avatar-name {
  max-width: 200px;
  opacity: 1;
  padding: 0 0.25rem;
}

/* Vertical pill */
.avatar--pill.vertical {
  flex-direction: column;
  height: var(--avatar-size);
  width: var(--avatar-size);
  padding: var(--avatar-padding);
}

.avatar--pill.vertical .avatar-image {
  position: absolute;
  top: 50%;
  left: 50%;
  transform: translate(-50%, -50%);
}

.avatar--pill.vertical .avatar-name {
  writing-mode: vertical-rl;
  text-orientation: mixed;
  transform: rotate(180deg);
  max-height: 0;
  opacity: 0;
  margin: 0.75rem 0;
}

.avatar--pill.vertical.expanded {
  height: auto;
  padding-bottom: 1.25rem;
}

.avatar--pill.vertical.expanded .avatar-image {
  position: relative;
  left: 0;
  top: 0;
  transform: none;
  margin-top: var(--avatar-padding);
}

.avatar--pill.vertical.expanded .avatar-name {
  max-height: 200px;
  opacity: 1;
}

/* Mobile sizes */
.avatar--mobile.avatar--square .avatar-image,
.avatar--mobile.avatar--circle .avatar-image,
.avatar--mobile.avatar--pill .avatar-image {
  width: 2.5rem;
  height: 2.5rem;
  font-size: 1rem;
}

.avatar--mobile.avatar--pill {
  --avatar-size: 3rem;
  --avatar-padding: 0.25rem;
}

.avatar--mobile.avatar--pill .avatar-name {
  font-size: 0.875rem;
}

/* Desktop sizes */
.avatar--desktop.avatar--square .avatar-image,
.avatar--desktop.avatar--circle .avatar-image,
.avatar--desktop.avatar--pill .avatar-image {
  width: 3.5rem;
  height: 3.5rem;
  font-size: 1.25rem;
}

.avatar--desktop.avatar--pill {
  --avatar-size: 4rem;
  --avatar-padding: 0.25rem;
}

.avatar--desktop.avatar--pill .avatar-name {
  font-size: 1rem;
}

/* Hover effects */
.avatar--pill:hover {
  background-color: var(--color-bg-secondary, #FAFAFA);
  transform: translateY(-1px);
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

.avatar--pill:active {
  transform: translateY(0);
  box-shadow: none;
}
"#;

#[derive(Debug, Clone, Default)]
pub struct Avatar {
    expanded: bool,
}

impl Avatar {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn is_pill(attrs: &Attributes) -> bool {
        attrs.get_or("variant", DEFAULT_AVATAR_VARIANT) == "pill"
    }
}

/// Image when one is given, initials otherwise
pub(crate) fn avatar_face(name: &str, image: &str) -> String {
    if image.is_empty() {
        escape(&initials(name))
    } else {
        format!(r#"<img src="{}" alt="{}">"#, escape(image), escape(name))
    }
}

impl Component for Avatar {
    fn tag(&self) -> &'static str {
        TAG_AVATAR
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["variant", "size", "name", "image", "direction"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let variant = attrs.get_or("variant", DEFAULT_AVATAR_VARIANT);
        let size = escape(attrs.get_or("size", DEFAULT_AVATAR_SIZE));
        let name = attrs.text("name");
        let face = avatar_face(name, attrs.text("image"));

        let markup = if Self::is_pill(attrs) {
            let direction = escape(attrs.get_or("direction", DEFAULT_AVATAR_DIRECTION));
            let expanded = if self.expanded { " expanded" } else { "" };
            format!(
                r#"<div class="avatar {PART_PILL} {direction}{expanded} avatar--{size}">
  <div class="avatar-image">{face}</div>
  <span class="avatar-name">{name}</span>
</div>"#,
                name = escape(name),
            )
        } else {
            format!(
                r#"<div class="avatar avatar--{variant} avatar--{size}">
  <div class="avatar-image">{face}</div>
</div>"#,
                variant = escape(variant),
            )
        };
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, attrs: &Attributes, scope: &mut RenderScope) {
        if Self::is_pill(attrs) {
            scope.bind(PART_PILL, InteractionKind::Click);
        }
    }

    fn handle(&mut self, part: &str, _interaction: &Interaction, _attrs: &Attributes, _ctx: &HostContext) -> Reaction {
        if part != PART_PILL {
            return Reaction::none();
        }
        self.expanded = !self.expanded;
        Reaction::none().repaint()
    }

    fn reset_display_state(&mut self) {
        self.expanded = false;
    }
}
