
#[path = "core/attributes.rs"]
mod attributes;

#[path = "core/context.rs"]
mod context;

#[path = "core/element.rs"]
mod element;

#[path = "core/event_bus.rs"]
mod event_bus;

#[path = "core/scope.rs"]
mod scope;
