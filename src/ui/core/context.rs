use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::{config::Config, error::WidgetError, theme::ThemeContext, utils::datetime::TimeStyle};

use super::event_bus::EventBus;

/// Source of "now" for relative-time rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(now) => *now,
        }
    }
}

/// Page-level scroll lock held by open modals
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn lock(&self) {
        log::debug!("page scroll locked");
        self.locked.set(true);
    }

    pub fn unlock(&self) {
        log::debug!("page scroll unlocked");
        self.locked.set(false);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Inline style for the page body, matching the lock state
    pub fn body_style(&self) -> &'static str {
        if self.is_locked() {
            "overflow: hidden;"
        } else {
            ""
        }
    }
}

/// Records navigation requests made by widgets
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    location: Rc<RefCell<Option<String>>>,
}

impl Navigator {
    pub fn navigate(&self, url: &str) {
        log::info!("navigate to {}", url);
        *self.location.borrow_mut() = Some(url.to_string());
    }

    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }
}

/// Shared state every element of one document renders and reacts against
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    pub theme: ThemeContext,
    pub events: EventBus,
    pub scroll_lock: ScrollLock,
    pub navigator: Navigator,
    pub clock: Clock,
    /// Overrides each article card's own relative-time style
    pub time_style: Option<TimeStyle>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Result<Self, WidgetError> {
        Ok(Self {
            theme: ThemeContext::from_config(&config.theme)?,
            time_style: config.display.time_style,
            ..Self::default()
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_theme(mut self, theme: ThemeContext) -> Self {
        self.theme = theme;
        self
    }
}
