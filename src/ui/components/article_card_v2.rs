//! Article card, v2: large title, topic tag and engagement stats
//!
//! The whole card is clickable and dates use the compact style.

use crate::constants::{DEFAULT_STAT_COUNT, TAG_ARTICLE_CARD_V2};
use crate::ui::core::{Attributes, Component, HostContext, Interaction, InteractionKind, Reaction, RenderScope};
use crate::utils::datetime::TimeStyle;
use crate::utils::html::{escape, scoped};
use crate::utils::initials::initials;

use super::article_card::{article_click, follow_link, image_block, time_ago, PART_CARD};

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
  cursor: pointer;
}

.article-card:hover {
  box-shadow: var(--shadow-md, 0 4px 6px rgba(0, 0, 0, 0.1));
  transform: translateY(-2px);
}

.article-image {
  width: 100%;
  height: 240px;
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
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  flex-grow: 1;
}

.article-tag {
  display: inline-block;
  background-color: var(--color-bg-secondary, #F5F5F5);
  color: var(--color-accent, #FF6B6B);
  font-family: 'DM Sans', sans-serif;
  font-size: 0.875rem;
  font-weight: 500;
  padding: 0.25rem 1rem;
  border-radius: 100px;
  margin-bottom: 1rem;
  align-self: flex-start;
}

.article-title {
  font-family: 'DM Sans', sans-serif;
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--color-text-primary, #333333);
  margin: 0 0 1.5rem 0;
  line-height: 1.3;
}

.article-meta {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: auto;
}

.article-author {
  display: flex;
  align-items: center;
}

.author-avatar {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  overflow: hidden;
  margin-right: 0.75rem;
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
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--color-text-primary, #333333);
  margin: 0;
}

.article-date {
  font-family: 'DM Sans', sans-serif;
  font-size: 1rem;
  color: var(--color-text-secondary, #666666);
  margin: 0;
}

.article-stats {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.stat-item {
  display: flex;
  align-items: center;
  color: var(--color-text-secondary, #666666);
  font-family: 'DM Sans', sans-serif;
  font-size: 1.125rem;
}

.stat-icon {
  margin-right: 0.5rem;
  opacity: 0.7;
}
"#;

const INITIALS_STYLE: &str = "width: 100%; height: 100%; background-color: var(--color-accent, #A7CBDA); \
display: flex; align-items: center; justify-content: center; color: white; font-weight: bold;";

#[derive(Debug, Clone, Default)]
pub struct ArticleCardV2;

impl ArticleCardV2 {
    fn author_face(attrs: &Attributes) -> String {
        let name = attrs.text("author-name");
        let image = attrs.text("author-image");
        if image.is_empty() {
            format!(r#"<div style="{INITIALS_STYLE}">{}</div>"#, escape(&initials(name)))
        } else {
            format!(r#"<img src="{}" alt="{}">"#, escape(image), escape(name))
        }
    }
}

impl Component for ArticleCardV2 {
    fn tag(&self) -> &'static str {
        TAG_ARTICLE_CARD_V2
    }

    fn watched_attributes(&self) -> &'static [&'static str] {
        &["title", "tag", "author-name", "author-image", "date", "image", "url", "comments", "likes"]
    }

    fn render(&self, attrs: &Attributes, ctx: &HostContext) -> String {
        let topic = attrs.text("tag");
        let topic = if topic.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="article-tag">{}</span>"#, escape(topic))
        };

        let markup = format!(
            r#"<article class="{PART_CARD}">
  {image}
  <div class="article-content">
    {topic}
    <h2 class="article-title">{title}</h2>
    <div class="article-meta">
      <div class="article-author">
        <div class="author-avatar">{face}</div>
        <div class="author-info">
          <p class="author-name">{author}</p>
          <p class="article-date">{date}</p>
        </div>
      </div>
      <div class="article-stats">
        <div class="stat-item">
          <span class="stat-icon">💬</span>
          <span>{comments}</span>
        </div>
        <div class="stat-item">
          <span class="stat-icon">⭐</span>
          <span>{likes}</span>
        </div>
      </div>
    </div>
  </div>
</article>"#,
            image = image_block(attrs),
            title = escape(attrs.text("title")),
            face = Self::author_face(attrs),
            author = escape(attrs.text("author-name")),
            date = escape(&time_ago(attrs, "date", TimeStyle::Compact, ctx)),
            comments = escape(attrs.get_or("comments", DEFAULT_STAT_COUNT)),
            likes = escape(attrs.get_or("likes", DEFAULT_STAT_COUNT)),
        );
        scoped(STYLES, &markup)
    }

    fn bind_listeners(&self, _attrs: &Attributes, scope: &mut RenderScope) {
        scope.bind(PART_CARD, InteractionKind::Click);
    }

    fn handle(&mut self, part: &str, _interaction: &Interaction, attrs: &Attributes, ctx: &HostContext) -> Reaction {
        if part != PART_CARD {
            return Reaction::none();
        }
        follow_link(attrs, ctx);
        Reaction::none().emit(article_click(attrs))
    }
}
