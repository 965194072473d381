//! Modal dialog component
//!
//! While open, the modal locks page scrolling through the host context's
//! [`ScrollLock`](crate::ui::core::ScrollLock). The lock changes only when
//! the open state does: on an `open` attribute change, on mount while open
//! and on unmount while open.

use crate::constants::TAG_MODAL;
use crate::ui::core::{
    Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope, WidgetEvent,
};
use crate::utils::html::{escape, scoped};

pub const PART_CLOSE: &str = "modal-close";
pub const PART_BACKDROP: &str = "modal-backdrop";

const STYLES: &str = r#"
:host {
  display: none;
}

:host([open]) {
  display: block;
}

.modal-backdrop {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background-color: rgba(0, 0, 0, 0.5);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  animation: fadeIn 0.2s ease-out;
}

.modal {
  background-color: var(--color-bg-primary, #FFFFFF);
  border-radius: 1rem;
  width: 90%;
  max-width: 500px;
  max-height: 90vh;
  overflow-y: auto;
  position: relative;
  animation: slideIn 0.3s ease-out;
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
  transition: background-color 0.3s ease;
}

:host-context([data-theme="dark"]) .modal {
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3);
}

.modal-header {
  padding: 1.5rem;
  border-bottom: 1px solid var(--color-border, #E0E0E0);
  display: flex;
  align-items: center;
  justify-content: space-between;
  transition: border-color 0.3s ease;
}

.modal-title {
  font-family: 'DM Sans', sans-serif;
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--color-text-primary, #333333);
  margin: 0;
  transition: color 0.3s ease;
}

.modal-close {
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
  color: var(--color-text-secondary, #666666);
  transition: color 0.2s;
}

.modal-close:hover {
  color: var(--color-text-primary, #333333);
}

.modal-content {
  padding: 1.5rem;
  color: var(--color-text-primary, #333333);
  transition: color 0.3s ease;
}

@keyframes fadeIn {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slideIn {
  from {
    transform: translateY(20px);
    opacity: 0;
  }
  to {
    transform: translateY(0);
    opacity: 1;
  }
}

::slotted(*) {
  margin: 0;
  color: var(--color-text-primary, #333333);
  transition: color 0.3s ease;
}
"#;

#[derive(Debug, Clone, Default)]
pub struct Modal {
    holds_scroll_lock: bool,
}

impl Modal {
    fn close() -> Reaction {
        Reaction::none().remove("open").emit(WidgetEvent::Close {})
    }

    /// Lock or unlock page scrolling when the open state differs from the lock we hold
    fn sync_scroll_lock(&mut self, open: bool, ctx: &HostContext) {
        if open == self.holds_scroll_lock {
            return;
        }
        if open {
            ctx.scroll_lock.lock();
        } else {
            ctx.scroll_lock.unlock();
        }
        self.holds_scroll_lock = open;
    }
}

impl Component for Modal {
    fn tag(&self) -> &'static str {
        TAG_MODAL
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["open", "title"]
    }

    fn render(&self, attrs: &Attributes, _ctx: &HostContext) -> String {
        let title = escape(attrs.text("title"));

        let markup = format!(
            r#"<div class="{PART_BACKDROP}">
  <div class="modal">
    <div class="modal-header">
      <h2 class="modal-title">{title}</h2>
      <button class="{PART_CLOSE}" aria-label="Close modal">✕</button>
    </div>
    <div class="modal-content">
      <slot></slot>
    </div>
  </div>
</div>"#
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_CLOSE, InteractionKind::Click);
        scope.bind(PART_BACKDROP, InteractionKind::Click);
    }

    fn handle(&mut self, part: &str, interaction: &Interaction, _attrs: &Attributes, _ctx: &HostContext) -> Reaction {
        match part {
            PART_CLOSE => Self::close(),
            // Only clicks on the backdrop itself, not ones bubbling out of the dialog.
            PART_BACKDROP if interaction.target() == Some(PART_BACKDROP) => Self::close(),
            _ => Reaction::none(),
        }
    }

    fn on_mount(&mut self, attrs: &Attributes, ctx: &HostContext) {
        self.sync_scroll_lock(attrs.has("open"), ctx);
    }

    fn on_unmount(&mut self, _attrs: &Attributes, ctx: &HostContext) {
        self.sync_scroll_lock(false, ctx);
    }

    fn attribute_changed(&mut self, name: &str, attrs: &Attributes, ctx: &HostContext) {
        if name == "open" {
            self.sync_scroll_lock(attrs.has("open"), ctx);
        }
    }
}
