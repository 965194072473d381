//! Theme context shared by every element of a document
//!
//! Components read theme values through CSS `var(--name, fallback)` lookups
//! inside their own stylesheets. The host decides the actual values; this
//! module is the single place those values live. The store is shared by
//! every clone of a [`ThemeContext`], and writes are last-write-wins.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::constants::{VAR_ACCENT, VAR_ACCENT_NAME};
use crate::error::WidgetError;
use crate::utils::color::AccentColor;

/// Named style variables understood by the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariable {
    Accent,
    AccentName,
    Primary,
    PrimaryLight,
    PrimaryDark,
    Secondary,
    SecondaryDark,
    BgPrimary,
    BgSecondary,
    TextPrimary,
    TextSecondary,
    Border,
    ShadowSm,
    ShadowMd,
}

impl ThemeVariable {
    pub const ALL: [ThemeVariable; 14] = [
        Self::Accent,
        Self::AccentName,
        Self::Primary,
        Self::PrimaryLight,
        Self::PrimaryDark,
        Self::Secondary,
        Self::SecondaryDark,
        Self::BgPrimary,
        Self::BgSecondary,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::Border,
        Self::ShadowSm,
        Self::ShadowMd,
    ];

    /// CSS custom property name, including the leading `--`
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Accent => VAR_ACCENT,
            Self::AccentName => VAR_ACCENT_NAME,
            Self::Primary => "--color-primary",
            Self::PrimaryLight => "--color-primary-light",
            Self::PrimaryDark => "--color-primary-dark",
            Self::Secondary => "--color-secondary",
            Self::SecondaryDark => "--color-secondary-dark",
            Self::BgPrimary => "--color-bg-primary",
            Self::BgSecondary => "--color-bg-secondary",
            Self::TextPrimary => "--color-text-primary",
            Self::TextSecondary => "--color-text-secondary",
            Self::Border => "--color-border",
            Self::ShadowSm => "--shadow-sm",
            Self::ShadowMd => "--shadow-md",
        }
    }

    /// Value used when the host supplies nothing
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Accent => "#A7CBDA",
            Self::AccentName => "blue",
            Self::Primary => "#90CAF9",
            Self::PrimaryLight => "#E3F2FD",
            Self::PrimaryDark => "#42A5F5",
            Self::Secondary => "#F48FB1",
            Self::SecondaryDark => "#EC407A",
            Self::BgPrimary => "#FFFFFF",
            Self::BgSecondary => "#FAFAFA",
            Self::TextPrimary => "#333333",
            Self::TextSecondary => "#666666",
            Self::Border => "#E0E0E0",
            Self::ShadowSm => "0 2px 4px rgba(0, 0, 0, 0.05)",
            Self::ShadowMd => "0 4px 6px rgba(0, 0, 0, 0.1)",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.css_name() == name)
    }
}

/// Cloneable handle to one shared set of theme variables
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    vars: Rc<RefCell<BTreeMap<String, String>>>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a theme from configuration: accent first, then explicit overrides
    pub fn from_config(config: &ThemeConfig) -> Result<Self, WidgetError> {
        let theme = Self::new();
        theme.set_accent(config.accent.parse()?);
        for (name, value) in &config.variables {
            theme.set(name, value);
        }
        Ok(theme)
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }

    /// Host value for `var`, or its documented fallback
    pub fn resolve(&self, var: ThemeVariable) -> String {
        self.get(var.css_name()).unwrap_or_else(|| var.fallback().to_string())
    }

    /// Write a variable; the last write wins
    pub fn set(&self, name: &str, value: &str) {
        log::debug!("theme: {} = {}", name, value);
        self.vars.borrow_mut().insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) -> Option<String> {
        self.vars.borrow_mut().remove(name)
    }

    /// Write both accent variables for a palette entry
    pub fn set_accent(&self, color: AccentColor) {
        self.set(VAR_ACCENT, color.hex());
        self.set(VAR_ACCENT_NAME, color.name());
    }

    /// Currently selected palette entry, if the accent name is one
    pub fn accent(&self) -> Option<AccentColor> {
        self.get(VAR_ACCENT_NAME).and_then(|name| AccentColor::from_name(&name))
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.vars.borrow().clone()
    }

    /// Render the variables as a `:root` rule for the host page
    pub fn root_style(&self) -> String {
        let vars = self.vars.borrow();
        let mut css = String::from(":root {\n");
        for (name, value) in vars.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}
