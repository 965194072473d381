//! Article card, v3: wide three-column layout
//!
//! The author column embeds a vertical pill `ui-avatar` and the time since
//! the last edit. The call-to-action navigates and announces the click
//! without letting it reach the card; a click anywhere else on the card
//! only navigates.

use crate::constants::{DEFAULT_AVATAR_SIZE, DEFAULT_CTA_TEXT, TAG_ARTICLE_CARD_V3, TAG_AVATAR};
use crate::ui::core::{Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope};
use crate::utils::datetime::TimeStyle;
use crate::utils::html::{attribute, escape, scoped};

use super::article_card::{article_click, follow_link, time_ago, PART_CARD, PART_CTA};
use super::avatar::Avatar;

const STYLES: &str = r#"
:host {
  display: block;
  --card-radius: 1rem;
  width: 100%;
  max-width: 100%;
}

.article-card {
  display: flex;
  background-color: var(--color-bg-primary, #FFFFFF);
  border-radius: var(--card-radius);
  overflow: hidden;
  box-shadow: var(--shadow-sm, 0 2px 4px rgba(0, 0, 0, 0.05));
  transition: all 0.2s ease-in-out;
  height: 100%;
  min-height: 400px;
  cursor: pointer;
}

.article-card:hover {
  box-shadow: var(--shadow-md, 0 4px 6px rgba(0, 0, 0, 0.1));
  transform: translateY(-2px);
}

.author-column {
  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1.5rem 0;
  width: 5rem;
  border-right: 1px solid var(--color-border, #EEEEEE);
  position: relative;
}

.content-column {
  flex: 1;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
}

.article-title {
  font-family: 'DM Sans', sans-serif;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--color-text-primary, #333333);
  margin: 0 0 1rem 0;
  line-height: 1.3;
}

.article-synopsis {
  font-family: 'DM Sans', sans-serif;
  font-size: 1rem;
  color: var(--color-text-secondary, #666666);
  margin: 0 0 1.5rem 0;
  line-height: 1.5;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
  flex-grow: 1;
}

.article-cta {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--color-accent, #A7CBDA);
  background: none;
  border: 1px solid var(--color-accent, #A7CBDA);
  border-radius: 0.25rem;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: all 0.2s ease;
  align-self: flex-start;
  margin-top: auto;
}

.article-cta:hover {
  background-color: var(--color-accent, #A7CBDA);
  color: white;
}

.image-column {
  width: 35%;
  max-width: 400px;
  padding: 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.image-wrapper {
  width: 100%;
  height: 100%;
  border-radius: var(--card-radius);
  overflow: hidden;
  box-shadow: var(--shadow-sm, 0 2px 4px rgba(0, 0, 0, 0.05));
}

.article-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.3s ease;
}

.article-card:hover .article-image {
  transform: scale(1.05);
}

.edited-date {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.75rem;
  color: var(--color-text-secondary, #666666);
  margin-top: 1.5rem;
  writing-mode: vertical-rl;
  transform: rotate(180deg);
  position: absolute;
  bottom: 1rem;
}

@media (max-width: 768px) {
  .article-card {
    flex-direction: column;
  }

  .author-column {
    width: 100%;
    flex-direction: row;
    padding: 1rem;
    border-right: none;
    border-bottom: 1px solid var(--color-border, #EEEEEE);
  }

  .edited-date {
    writing-mode: horizontal-tb;
    transform: none;
    position: static;
    margin-top: 0;
    margin-left: auto;
  }

  .image-column {
    width: 100%;
    max-width: none;
    height: 250px;
    order: -1;
  }
}
"#;

#[derive(Debug, Clone, Default)]
pub struct ArticleCardV3;

impl ArticleCardV3 {
    /// Nested avatar element for the author column, carrying its own
    /// rendered shadow root
    fn author_avatar(attrs: &Attributes, ctx: &HostContext) -> String {
        let mut avatar_attrs: Attributes = [("name", attrs.text("author-name"))].into_iter().collect();
        let image = attrs.text("author-image");
        if !image.is_empty() {
            avatar_attrs.set("image", image);
        }
        avatar_attrs.set("variant", "pill");
        avatar_attrs.set("direction", "vertical");
        avatar_attrs.set("size", DEFAULT_AVATAR_SIZE);

        let host_attrs: String = avatar_attrs.iter().map(|(name, value)| attribute(name, value)).collect();
        format!(
            r#"<{TAG_AVATAR}{host_attrs}><template shadowrootmode="open">{shadow}</template></{TAG_AVATAR}>"#,
            shadow = Avatar::default().render(&avatar_attrs, ctx),
        )
    }

    fn image_column(attrs: &Attributes) -> String {
        let image = attrs.text("image");
        if image.is_empty() {
            return String::new();
        }
        format!(
            r#"<div class="image-column">
    <div class="image-wrapper">
      <img class="article-image" src="{}" alt="{}">
    </div>
  </div>"#,
            escape(image),
            escape(attrs.text("title")),
        )
    }
}

impl Component for ArticleCardV3 {
    fn tag(&self) -> &'static str {
        TAG_ARTICLE_CARD_V3
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &[
            "title",
            "synopsis",
            "author-name",
            "author-image",
            "date",
            "image",
            "cta-text",
            "url",
            "edited-date",
        ]
    }

    fn render(&self, attrs: &Attributes, ctx: &HostContext) -> String {
        let edited = time_ago(attrs, "edited-date", TimeStyle::Verbose, ctx);
        let edited = if edited.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="edited-date">edited {}</span>"#, escape(&edited))
        };

        let markup = format!(
            r#"<article class="{PART_CARD}">
  <div class="author-column">
    {avatar}
    {edited}
  </div>
  <div class="content-column">
    <h2 class="article-title">{title}</h2>
    <p class="article-synopsis">{synopsis}</p>
    <button class="{PART_CTA}">{cta}</button>
  </div>
  {image}
</article>"#,
            avatar = Self::author_avatar(attrs, ctx),
            title = escape(attrs.text("title")),
            synopsis = escape(attrs.text("synopsis")),
            cta = escape(attrs.get_or("cta-text", DEFAULT_CTA_TEXT)),
            image = Self::image_column(attrs),
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_CTA, InteractionKind::Click);
        scope.bind(PART_CARD, InteractionKind::Click);
    }

    fn handle(&mut self, part: &str, _interaction: &Interaction, attrs: &Attributes, ctx: &HostContext) -> Reaction {
        match part {
            PART_CTA => {
                follow_link(attrs, ctx);
                Reaction::none().emit(article_click(attrs)).stop_propagation()
            }
            PART_CARD => {
                follow_link(attrs, ctx);
                Reaction::none()
            }
            _ => Reaction::none(),
        }
    }
}
