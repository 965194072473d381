//! Widget kinds and the tag registry

pub mod accent_selector;
pub mod article_card;
pub mod article_card_v2;
pub mod article_card_v3;
pub mod avatar;
pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod toggle;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::constants::{
    TAG_ACCENT_SELECTOR, TAG_ARTICLE_CARD, TAG_ARTICLE_CARD_V2, TAG_ARTICLE_CARD_V3, TAG_AVATAR, TAG_BUTTON,
    TAG_CARD, TAG_INPUT, TAG_MODAL, TAG_TOGGLE,
};
use crate::error::WidgetError;
use crate::ui::core::{Attributes, Component, HostContext, Interaction, Reaction, RenderScope};

pub use accent_selector::AccentColorSelector;
pub use article_card::ArticleCard;
pub use article_card_v2::ArticleCardV2;
pub use article_card_v3::ArticleCardV3;
pub use avatar::Avatar;
pub use button::Button;
pub use card::Card;
pub use input::Input;
pub use modal::Modal;
pub use toggle::Toggle;

/// Constructors for every registered tag
static REGISTRY: Lazy<BTreeMap<&'static str, fn() -> Widget>> = Lazy::new(|| {
    let mut registry: BTreeMap<&'static str, fn() -> Widget> = BTreeMap::new();
    registry.insert(TAG_BUTTON, || Widget::Button(Button));
    registry.insert(TAG_CARD, || Widget::Card(Card));
    registry.insert(TAG_INPUT, || Widget::Input(Input));
    registry.insert(TAG_MODAL, || Widget::Modal(Modal::default()));
    registry.insert(TAG_TOGGLE, || Widget::Toggle(Toggle));
    registry.insert(TAG_AVATAR, || Widget::Avatar(Avatar::default()));
    registry.insert(TAG_ACCENT_SELECTOR, || {
        Widget::AccentColorSelector(AccentColorSelector::default())
    });
    registry.insert(TAG_ARTICLE_CARD, || Widget::ArticleCard(ArticleCard));
    registry.insert(TAG_ARTICLE_CARD_V2, || Widget::ArticleCardV2(ArticleCardV2));
    registry.insert(TAG_ARTICLE_CARD_V3, || Widget::ArticleCardV3(ArticleCardV3));
    registry
});

/// Every registered tag, sorted
pub fn tags() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

pub fn is_registered(tag: &str) -> bool {
    REGISTRY.contains_key(tag.trim().to_ascii_lowercase().as_str())
}

/// One widget instance of any registered kind
#[derive(Debug, Clone)]
pub enum Widget {
    Button(Button),
    Card(Card),
    Input(Input),
    Modal(Modal),
    Toggle(Toggle),
    Avatar(Avatar),
    AccentColorSelector(AccentColorSelector),
    ArticleCard(ArticleCard),
    ArticleCardV2(ArticleCardV2),
    ArticleCardV3(ArticleCardV3),
}

impl Widget {
    /// Build a fresh widget for a tag name (case-insensitive)
    pub fn from_tag(tag: &str) -> Result<Self, WidgetError> {
        let normalized = tag.trim().to_ascii_lowercase();
        REGISTRY
            .get(normalized.as_str())
            .map(|build| build())
            .ok_or_else(|| WidgetError::UnknownTag(tag.to_string()))
    }

    pub fn as_component(&self) -> &dyn Component {
        match self {
            Self::Button(w) => w,
            Self::Card(w) => w,
            Self::Input(w) => w,
            Self::Modal(w) => w,
            Self::Toggle(w) => w,
            Self::Avatar(w) => w,
            Self::AccentColorSelector(w) => w,
            Self::ArticleCard(w) => w,
            Self::ArticleCardV2(w) => w,
            Self::ArticleCardV3(w) => w,
        }
    }

    pub fn as_component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::Button(w) => w,
            Self::Card(w) => w,
            Self::Input(w) => w,
            Self::Modal(w) => w,
            Self::Toggle(w) => w,
            Self::Avatar(w) => w,
            Self::AccentColorSelector(w) => w,
            Self::ArticleCard(w) => w,
            Self::ArticleCardV2(w) => w,
            Self::ArticleCardV3(w) => w,
        }
    }
}

impl Component for Widget {
    fn tag(&self) -> &'static str {
        self.as_component().tag()
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        self.as_component().watched_attributes()
    }

    fn render(&self, attrs: &Attributes, ctx: &HostContext) -> String {
        self.as_component().render(attrs, ctx)
    }

    fn bind_listeners(&self, attrs: &Attributes, scope: &mut RenderScope) {
        self.as_component().bind_listeners(attrs, scope);
    }

    fn handle(&mut self, part: &str, interaction: &Interaction, attrs: &Attributes, ctx: &HostContext) -> Reaction {
        self.as_component_mut().handle(part, interaction, attrs, ctx)
    }

    fn on_mount(&mut self, attrs: &Attributes, ctx: &HostContext) {
        self.as_component_mut().on_mount(attrs, ctx);
    }

    fn on_unmount(&mut self, attrs: &Attributes, ctx: &HostContext) {
        self.as_component_mut().on_unmount(attrs, ctx);
    }

    fn attribute_changed(&mut self, name: &str, attrs: &Attributes, ctx: &HostContext) {
        self.as_component_mut().attribute_changed(name, attrs, ctx);
    }

    fn reset_display_state(&mut self) {
        self.as_component_mut().reset_display_state();
    }
}
