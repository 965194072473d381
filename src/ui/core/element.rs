use std::fmt;

use serde::Serialize;

use crate::error::WidgetError;
use crate::ui::components::Widget;
use crate::utils::html;

use super::actions::{AttributeWrite, Interaction, WidgetEvent};
use super::attributes::{self, AttributeChange, Attributes};
use super::component::Component;
use super::context::HostContext;
use super::event_bus::EventEnvelope;
use super::scope::RenderScope;

/// Position of an element in its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One live component instance
///
/// Owns the attribute map, the widget's display state and the isolated
/// rendering scope. Renders are full replacements of the scope.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    widget: Widget,
    attributes: Attributes,
    scope: RenderScope,
    content: String,
    mounted: bool,
    render_count: u64,
}

impl Element {
    pub fn new(id: ElementId, widget: Widget) -> Self {
        Self {
            id,
            widget,
            attributes: Attributes::new(),
            scope: RenderScope::new(),
            content: String::new(),
            mounted: false,
            render_count: 0,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tag(&self) -> &'static str {
        self.widget.tag()
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.has(name)
    }

    pub fn scope(&self) -> &RenderScope {
        &self.scope
    }

    /// Current encapsulated output
    pub fn shadow_html(&self) -> &str {
        self.scope.markup()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Light-DOM content projected into the widget's `<slot>`
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Enter the live tree: first render plus listener wiring, exactly once
    pub fn mount(&mut self, ctx: &HostContext) {
        if self.mounted {
            log::warn!("{} {} is already mounted", self.tag(), self.id);
            return;
        }
        self.mounted = true;
        self.render(ctx);
        self.widget.on_mount(&self.attributes, ctx);
    }

    /// Leave the live tree, releasing listeners and rendered output
    pub fn unmount(&mut self, ctx: &HostContext) {
        if !self.mounted {
            return;
        }
        self.widget.on_unmount(&self.attributes, ctx);
        self.scope.clear();
        self.mounted = false;
        log::debug!("unmounted {} {}", self.tag(), self.id);
    }

    pub fn set_attribute(&mut self, name: &str, value: &str, ctx: &HostContext) -> Result<(), WidgetError> {
        let name = normalize_name(name)?;
        let change = self.attributes.set(&name, value);
        self.on_attribute_change(change, ctx);
        Ok(())
    }

    /// Remove an attribute; removing an absent one is not a mutation
    pub fn remove_attribute(&mut self, name: &str, ctx: &HostContext) -> Result<(), WidgetError> {
        let name = normalize_name(name)?;
        if let Some(change) = self.attributes.remove(&name) {
            self.on_attribute_change(change, ctx);
        }
        Ok(())
    }

    /// Change callback; sees every mutation and filters to watched ones
    fn on_attribute_change(&mut self, change: AttributeChange, ctx: &HostContext) {
        if !self.widget.watched_attributes().contains(&change.name.as_str()) {
            return;
        }
        // Before mount the first render picks the value up.
        if change.is_noop() || !self.mounted {
            return;
        }

        log::debug!(
            "{} {}: {} {:?} -> {:?}",
            self.tag(),
            self.id,
            change.name,
            change.old_value,
            change.new_value
        );
        self.widget.reset_display_state();
        self.render(ctx);
        self.widget.attribute_changed(&change.name, &self.attributes, ctx);
    }

    /// Replace the scope with fresh output and rebind listeners
    pub fn render(&mut self, ctx: &HostContext) {
        let markup = self.widget.render(&self.attributes, ctx);
        self.scope.replace(markup);
        self.widget.bind_listeners(&self.attributes, &mut self.scope);
        self.render_count += 1;
        log::trace!("rendered {} {} (render #{})", self.tag(), self.id, self.render_count);
    }

    /// Deliver an interaction and publish the resulting events
    ///
    /// Parts along the interaction path without a matching listener are
    /// skipped, as is everything on an unmounted element.
    pub fn dispatch(&mut self, interaction: &Interaction, ctx: &HostContext) -> Vec<WidgetEvent> {
        let mut published = Vec::new();
        if !self.mounted {
            return published;
        }

        for part in &interaction.path {
            if !self.scope.is_bound(part, interaction.kind) {
                continue;
            }

            let reaction = self.widget.handle(part, interaction, &self.attributes, ctx);

            for write in reaction.writes {
                let change = match write {
                    AttributeWrite::Set(name, value) => Some(self.attributes.set(&name, &value)),
                    AttributeWrite::Remove(name) => self.attributes.remove(&name),
                };
                if let Some(change) = change {
                    self.on_attribute_change(change, ctx);
                }
            }

            if reaction.repaint {
                self.render(ctx);
            }

            for event in reaction.events {
                ctx.events.publish(&EventEnvelope::new(self.id, self.tag(), event.clone()));
                published.push(event);
            }

            if reaction.stop_propagation {
                break;
            }
        }

        published
    }

    /// Serialize as declarative shadow DOM
    pub fn to_html(&self) -> String {
        let attrs: String = self
            .attributes
            .iter()
            .map(|(name, value)| html::attribute(name, value))
            .collect();
        format!(
            "<{tag}{attrs}><template shadowrootmode=\"open\">{shadow}</template>{content}</{tag}>",
            tag = self.tag(),
            shadow = self.scope.markup(),
            content = self.content,
        )
    }
}

fn normalize_name(name: &str) -> Result<String, WidgetError> {
    if attributes::is_valid_name(name) {
        Ok(name.to_ascii_lowercase())
    } else {
        Err(WidgetError::InvalidAttributeName(name.to_string()))
    }
}
