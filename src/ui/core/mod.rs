//! Core component runtime for shadekit.
//!
//! This module contains the building blocks every widget shares: attribute
//! storage, the component contract, the element lifecycle, encapsulated
//! rendering scopes and the event channel back to the host.
//!
//! # Module Components
//!
//! - [`actions`] - Outbound events, inbound interactions and handler reactions
//! - [`attributes`] - Ordered attribute map with presence-flag queries
//! - [`component`] - The per-widget-kind [`Component`] trait
//! - [`context`] - Host state shared by one document (theme, bus, clock)
//! - [`element`] - Live instances and their mount/change/render lifecycle
//! - [`event_bus`] - Publish/subscribe channel for widget events
//! - [`scope`] - Encapsulated markup plus listener bindings
//!
//! # Lifecycle
//!
//! 1. An [`Element`] is mounted once and renders for the first time
//! 2. Every attribute mutation reaches its change callback
//! 3. Only watched attributes whose value really changed re-render
//! 4. Each render replaces the scope and rebinds listeners
//! 5. Interactions on bound parts yield attribute writes and events

pub mod actions;
pub mod attributes;
pub mod component;
pub mod context;
pub mod element;
pub mod event_bus;
pub mod scope;

pub use actions::{AttributeWrite, Interaction, InteractionKind, Reaction, WidgetEvent};
pub use attributes::{AttributeChange, Attributes};
pub use component::Component;
pub use context::{Clock, HostContext, Navigator, ScrollLock};
pub use element::{Element, ElementId};
pub use event_bus::{EventBus, EventEnvelope, SubscriptionId};
pub use scope::{Listener, RenderScope};
