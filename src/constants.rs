//! Constants used throughout the library
//!
//! This module centralizes tag names, event names, attribute defaults and
//! other constant values to improve maintainability and consistency.

// Component tags
pub const TAG_BUTTON: &str = "ui-button";
pub const TAG_CARD: &str = "ui-card";
pub const TAG_INPUT: &str = "ui-input";
pub const TAG_MODAL: &str = "ui-modal";
pub const TAG_TOGGLE: &str = "ui-toggle";
pub const TAG_AVATAR: &str = "ui-avatar";
pub const TAG_ACCENT_SELECTOR: &str = "ui-accent-selector";
pub const TAG_ARTICLE_CARD: &str = "ui-article-card";
pub const TAG_ARTICLE_CARD_V2: &str = "ui-article-card-v2";
pub const TAG_ARTICLE_CARD_V3: &str = "ui-article-card-v3";

// Outbound event names
pub const EVENT_ARTICLE_CLICK: &str = "article-click";
pub const EVENT_ACCENT_COLOR_CHANGE: &str = "accent-color-change";
pub const EVENT_CHANGE: &str = "change";
pub const EVENT_INPUT: &str = "input";
pub const EVENT_CLOSE: &str = "close";

// Attribute defaults
pub const DEFAULT_BUTTON_VARIANT: &str = "primary";
pub const DEFAULT_CARD_ELEVATION: &str = "medium";
pub const DEFAULT_CARD_PADDING: &str = "medium";
pub const DEFAULT_INPUT_TYPE: &str = "text";
pub const DEFAULT_AVATAR_VARIANT: &str = "square";
pub const DEFAULT_AVATAR_SIZE: &str = "desktop";
pub const DEFAULT_AVATAR_DIRECTION: &str = "horizontal";
pub const DEFAULT_CTA_TEXT: &str = "Read more";
pub const DEFAULT_STAT_COUNT: &str = "0";

// Theme variables written by the accent selector
pub const VAR_ACCENT: &str = "--color-accent";
pub const VAR_ACCENT_NAME: &str = "--color-accent-name";

// Configuration
pub const APP_NAME: &str = "shadekit";
pub const CONFIG_FILE_NAME: &str = "shadekit.toml";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "shadekit.log";
