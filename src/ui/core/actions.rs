use serde::Serialize;

use crate::constants::{EVENT_ACCENT_COLOR_CHANGE, EVENT_ARTICLE_CLICK, EVENT_CHANGE, EVENT_CLOSE, EVENT_INPUT};

/// Notification a widget publishes to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WidgetEvent {
    ArticleClick { title: String, url: String },
    AccentColorChange { name: String, value: String },
    Change { checked: bool },
    Input { value: String },
    Close {},
}

impl WidgetEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ArticleClick { .. } => EVENT_ARTICLE_CLICK,
            Self::AccentColorChange { .. } => EVENT_ACCENT_COLOR_CHANGE,
            Self::Change { .. } => EVENT_CHANGE,
            Self::Input { .. } => EVENT_INPUT,
            Self::Close {} => EVENT_CLOSE,
        }
    }

    /// Payload as JSON, e.g. `{"checked":true}`
    pub fn detail(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Click,
    Input,
    KeyDown,
}

/// A user interaction delivered to an element
///
/// `path` lists the parts the interaction passes through, innermost first:
/// the target part, then its ancestors inside the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub path: Vec<String>,
    /// Typed text for `Input`, key name for `KeyDown`
    pub data: Option<String>,
}

impl Interaction {
    pub fn click(part: &str) -> Self {
        Self::click_path(&[part])
    }

    pub fn click_path(path: &[&str]) -> Self {
        Self {
            kind: InteractionKind::Click,
            path: path.iter().map(|part| part.to_string()).collect(),
            data: None,
        }
    }

    pub fn input(part: &str, value: &str) -> Self {
        Self {
            kind: InteractionKind::Input,
            path: vec![part.to_string()],
            data: Some(value.to_string()),
        }
    }

    pub fn key_down(part: &str, key: &str) -> Self {
        Self {
            kind: InteractionKind::KeyDown,
            path: vec![part.to_string()],
            data: Some(key.to_string()),
        }
    }

    /// Part the interaction originated on
    pub fn target(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn data(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }
}

/// Attribute write requested by an interaction handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeWrite {
    Set(String, String),
    Remove(String),
}

/// What a widget wants done after handling an interaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub writes: Vec<AttributeWrite>,
    pub events: Vec<WidgetEvent>,
    /// Re-render to show changed display state, keeping that state
    pub repaint: bool,
    pub stop_propagation: bool,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.writes.push(AttributeWrite::Set(name.to_string(), value.to_string()));
        self
    }

    pub fn remove(mut self, name: &str) -> Self {
        self.writes.push(AttributeWrite::Remove(name.to_string()));
        self
    }

    pub fn emit(mut self, event: WidgetEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn repaint(mut self) -> Self {
        self.repaint = true;
        self
    }

    pub fn stop_propagation(mut self) -> Self {
        self.stop_propagation = true;
        self
    }
}
