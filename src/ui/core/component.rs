use super::actions::{Interaction, Reaction};
use super::attributes::Attributes;
use super::context::HostContext;
use super::scope::RenderScope;

/// Behavior of one widget kind
///
/// Implementors hold only transient display state; everything that must
/// survive a re-render lives in the element's attributes.
pub trait Component {
    /// Custom-element tag name
    fn tag(&self) -> &'static str;

    /// Attributes whose changes trigger a re-render, in declaration order
    fn watched_attributes(&self) -> &'static [&'static str];

    /// Full encapsulated output (stylesheet and markup) for the current state
    fn render(&self, attrs: &Attributes, ctx: &HostContext) -> String;

    /// Attach listeners to freshly rendered markup
    fn bind_listeners(&self, _attrs: &Attributes, _scope: &mut RenderScope) {}

    /// React to an interaction on a bound `part`
    fn handle(&mut self, _part: &str, _interaction: &Interaction, _attrs: &Attributes, _ctx: &HostContext) -> Reaction {
        Reaction::none()
    }

    // Optional lifecycle hooks
    fn on_mount(&mut self, _attrs: &Attributes, _ctx: &HostContext) {}
    fn on_unmount(&mut self, _attrs: &Attributes, _ctx: &HostContext) {}

    /// Runs after the re-render caused by a watched attribute change
    fn attribute_changed(&mut self, _name: &str, _attrs: &Attributes, _ctx: &HostContext) {}

    /// Drop transient display state before an attribute-driven render
    fn reset_display_state(&mut self) {}
}
