//! Article card component, plus the pieces its v2 and v3 variants share

use crate::constants::{DEFAULT_CTA_TEXT, TAG_ARTICLE_CARD};
use crate::ui::core::{
    Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope, WidgetEvent,
};
use crate::utils::datetime::{format_time_ago_at, TimeStyle};
use crate::utils::html::{escape, scoped};

use super::avatar::avatar_face;

pub const PART_CTA: &str = "article-cta";
pub const PART_CARD: &str = "article-card";

const STYLES: &str = r#"
:host {
  display: block;
  --card-radius: 1rem;
}

.article-card {
  display: flex;
  flex-direction: column;
  background-color: var(--color-bg-primary, #FFFFFF);
  border-radius: var(--card-radius);
  overflow: hidden;
  box-shadow: var(--shadow-sm, 0 2px 4px rgba(0, 0, 0, 0.05));
  transition: all 0.2s ease-in-out;
  height: 100%;
}

.article-card:hover {
  box-shadow: var(--shadow-md, 0 4px 6px rgba(0, 0, 0, 0.1));
  transform: translateY(-2px);
}

.article-image {
  width: 100%;
  height: 160px;
  background-color: var(--color-bg-secondary, #FAFAFA);
  overflow: hidden;
  position: relative;
}

.article-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform 0.3s ease;
}

.article-card:hover .article-image img {
  transform: scale(1.05);
}

.article-content {
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  flex-grow: 1;
}

.article-title {
  font-family: 'DM Sans', sans-serif;
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--color-text-primary, #333333);
  margin: 0 0 0.5rem 0;
  line-height: 1.4;
}

.article-synopsis {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  color: var(--color-text-secondary, #666666);
  margin: 0 0 1rem 0;
  line-height: 1.5;
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
  flex-grow: 1;
}

.article-meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: auto;
  padding-top: 1rem;
  border-top: 1px solid var(--color-border, #E0E0E0);
}

.article-author {
  display: flex;
  align-items: center;
}

.author-avatar {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background-color: var(--color-accent, #A7CBDA);
  color: var(--color-text-primary, #FFFFFF);
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 500;
  font-size: 0.75rem;
  margin-right: 0.5rem;
  overflow: hidden;
}

.author-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.author-info {
  display: flex;
  flex-direction: column;
}

.author-name {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--color-text-primary, #333333);
  margin: 0;
}

.article-date {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.75rem;
  color: var(--color-text-secondary, #666666);
  margin: 0;
}

.article-cta {
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--color-accent, #A7CBDA);
  background: none;
  border: none;
  padding: 0.5rem;
  cursor: pointer;
  transition: color 0.2s ease;
  display: flex;
  align-items: center;
}

.article-cta:hover {
  color: color-mix(in srgb, var(--color-accent, #A7CBDA) 80%, black);
}

.article-cta::after {
  content: "→";
  margin-left: 0.25rem;
  transition: transform 0.2s ease;
}

.article-cta:hover::after {
  transform: translateX(2px);
}
"#;

/// Relative time for the timestamp in attribute `name`
///
/// The host's configured style, when set, wins over the card's own.
pub(crate) fn time_ago(attrs: &Attributes, name: &str, style: TimeStyle, ctx: &HostContext) -> String {
    let style = ctx.time_style.unwrap_or(style);
    format_time_ago_at(attrs.text(name), ctx.clock.now(), style)
}

/// Image block shown above the content when `image` is set
pub(crate) fn image_block(attrs: &Attributes) -> String {
    let image = attrs.text("image");
    if image.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="article-image">
      <img src="{}" alt="{}">
    </div>"#,
        escape(image),
        escape(attrs.text("title")),
    )
}

/// Follow the card's link, if it has one
pub(crate) fn follow_link(attrs: &Attributes, ctx: &HostContext) {
    let url = attrs.text("url");
    if !url.is_empty() {
        ctx.navigator.navigate(url);
    }
}

pub(crate) fn article_click(attrs: &Attributes) -> WidgetEvent {
    WidgetEvent::ArticleClick {
        title: attrs.text("title").to_string(),
        url: attrs.text("url").to_string(),
    }
}

/// Standard article card with a call-to-action button and verbose dates
#[derive(Debug, Clone, Default)]
pub struct ArticleCard;

impl Component for ArticleCard {
    fn tag(&self) -> &'static str {
        TAG_ARTICLE_CARD
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["title", "synopsis", "author-name", "author-image", "date", "image", "cta-text", "url"]
    }

    fn render(&self, attrs: &Attributes, ctx: &HostContext) -> String {
        let author = attrs.text("author-name");

        let markup = format!(
            r#"<article class="{PART_CARD}">
  {image}
  <div class="article-content">
    <h3 class="article-title">{title}</h3>
    <p class="article-synopsis">{synopsis}</p>
    <div class="article-meta">
      <div class="article-author">
        <div class="author-avatar">{face}</div>
        <div class="author-info">
          <p class="author-name">{author}</p>
          <p class="article-date">{date}</p>
        </div>
      </div>
      <button class="{PART_CTA}">{cta}</button>
    </div>
  </div>
</article>"#,
            image = image_block(attrs),
            title = escape(attrs.text("title")),
            synopsis = escape(attrs.text("synopsis")),
            face = avatar_face(author, attrs.text("author-image")),
            author = escape(author),
            date = escape(&time_ago(attrs, "date", TimeStyle::Verbose, ctx)),
            cta = escape(attrs.get_or("cta-text", DEFAULT_CTA_TEXT)),
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_CTA, InteractionKind::Click);
    }

    fn handle(&mut self, part: &str, _interaction: &Interaction, attrs: &Attributes, ctx: &HostContext) -> Reaction {
        if part != PART_CTA {
            return Reaction::none();
        }
        follow_link(attrs, ctx);
        Reaction::none().emit(article_click(attrs))
    }
}
