//! Display tree of live elements sharing one host context

use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::WidgetError;
use crate::ui::components::Widget;
use crate::ui::core::{Element, ElementId, EventEnvelope, HostContext, Interaction, SubscriptionId, WidgetEvent};

/// Owns every element of a page and routes host calls to them
#[derive(Debug, Default)]
pub struct Document {
    context: HostContext,
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: HostContext) -> Self {
        Self {
            context,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, WidgetError> {
        Ok(Self::with_context(HostContext::from_config(config)?))
    }

    pub fn context(&self) -> &HostContext {
        &self.context
    }

    /// Create an element for `tag` without mounting it
    pub fn create(&mut self, tag: &str) -> Result<ElementId, WidgetError> {
        let widget = Widget::from_tag(tag)?;
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::new(id, widget));
        Ok(id)
    }

    /// Create, set the initial attributes, then mount
    ///
    /// Initial attributes are in place before the first render, so the
    /// element renders exactly once.
    pub fn insert(&mut self, tag: &str, attributes: &[(&str, &str)]) -> Result<ElementId, WidgetError> {
        let id = self.create(tag)?;
        for (name, value) in attributes {
            if let Err(err) = self.set_attribute(id, name, value) {
                self.elements.remove(&id);
                return Err(err);
            }
        }
        self.mount(id)?;
        Ok(id)
    }

    pub fn mount(&mut self, id: ElementId) -> Result<(), WidgetError> {
        let element = self.elements.get_mut(&id).ok_or(WidgetError::ElementNotFound(id))?;
        element.mount(&self.context);
        log::debug!("mounted {} {}", element.tag(), id);
        Ok(())
    }

    /// Unmount and drop an element, handing it back
    pub fn remove(&mut self, id: ElementId) -> Result<Element, WidgetError> {
        let mut element = self.elements.remove(&id).ok_or(WidgetError::ElementNotFound(id))?;
        element.unmount(&self.context);
        Ok(element)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<(), WidgetError> {
        let element = self.elements.get_mut(&id).ok_or(WidgetError::ElementNotFound(id))?;
        element.set_attribute(name, value, &self.context)
    }

    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<(), WidgetError> {
        let element = self.elements.get_mut(&id).ok_or(WidgetError::ElementNotFound(id))?;
        element.remove_attribute(name, &self.context)
    }

    /// Set the light-DOM content projected into the element's slot
    pub fn set_content(&mut self, id: ElementId, content: &str) -> Result<(), WidgetError> {
        let element = self.elements.get_mut(&id).ok_or(WidgetError::ElementNotFound(id))?;
        element.set_content(content);
        Ok(())
    }

    /// Deliver an interaction; returns the events the element published
    pub fn dispatch(&mut self, id: ElementId, interaction: &Interaction) -> Result<Vec<WidgetEvent>, WidgetError> {
        let element = self.elements.get_mut(&id).ok_or(WidgetError::ElementNotFound(id))?;
        log::debug!("dispatch {:?} on {} {} via {:?}", interaction.kind, element.tag(), id, interaction.path);
        Ok(element.dispatch(interaction, &self.context))
    }

    pub fn element(&self, id: ElementId) -> Result<&Element, WidgetError> {
        self.elements.get(&id).ok_or(WidgetError::ElementNotFound(id))
    }

    /// Elements in creation order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Listen for widget events, optionally only those named `event`
    pub fn subscribe<F>(&self, event: Option<&str>, callback: F) -> SubscriptionId
    where
        F: FnMut(&EventEnvelope) + 'static,
    {
        self.context.events.subscribe(event, callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.context.events.unsubscribe(id);
    }
}
