//! Whole-page rendering and the showcase gallery

use chrono::Duration;

use crate::constants::{
    APP_NAME, TAG_ACCENT_SELECTOR, TAG_ARTICLE_CARD, TAG_ARTICLE_CARD_V2, TAG_ARTICLE_CARD_V3, TAG_AVATAR,
    TAG_BUTTON, TAG_CARD, TAG_INPUT, TAG_MODAL, TAG_TOGGLE,
};
use crate::error::WidgetError;
use crate::utils::html::escape;

use super::document::Document;

const PAGE_STYLES: &str = r#"
body {
  font-family: 'DM Sans', sans-serif;
  background-color: var(--color-bg-secondary, #FAFAFA);
  color: var(--color-text-primary, #333333);
  margin: 0;
  padding: 2rem;
}

.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}
"#;

/// Render every element of `document` into a standalone HTML page
///
/// The theme's variables land in a `:root` rule and the body carries the
/// scroll lock state.
pub fn render_page(document: &Document, title: &str) -> String {
    let ctx = document.context();
    let body_style = ctx.scroll_lock.body_style();
    let body_attr = if body_style.is_empty() {
        String::new()
    } else {
        format!(" style=\"{body_style}\"")
    };

    let elements: Vec<String> = document.elements().map(|element| element.to_html()).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{root}
{page}
</style>
</head>
<body{body_attr}>
<main class="gallery">
{elements}
</main>
</body>
</html>
"#,
        title = escape(title),
        root = ctx.theme.root_style(),
        page = PAGE_STYLES.trim(),
        elements = elements.join("\n"),
    )
}

/// Populate `document` with one of each widget
pub fn populate_gallery(document: &mut Document) -> Result<(), WidgetError> {
    let now = document.context().clock.now();
    let minutes_ago = (now - Duration::minutes(5)).to_rfc3339();
    let hours_ago = (now - Duration::hours(3)).to_rfc3339();
    let days_ago = (now - Duration::days(2)).to_rfc3339();
    let months_ago = (now - Duration::days(95)).to_rfc3339();

    let button = document.insert(TAG_BUTTON, &[("variant", "primary")])?;
    document.set_content(button, "Primary")?;
    let button = document.insert(TAG_BUTTON, &[("variant", "secondary")])?;
    document.set_content(button, "Secondary")?;
    let button = document.insert(TAG_BUTTON, &[("variant", "primary"), ("disabled", "")])?;
    document.set_content(button, "Disabled")?;

    let card = document.insert(TAG_CARD, &[("elevation", "high"), ("padding", "large")])?;
    document.set_content(card, "<p>A raised card with generous padding.</p>")?;

    document.insert(TAG_INPUT, &[("label", "Email"), ("type", "email"), ("placeholder", "you@example.com")])?;
    document.insert(TAG_TOGGLE, &[("label", "Notifications"), ("checked", "")])?;

    document.insert(TAG_AVATAR, &[("name", "Ada Lovelace"), ("variant", "circle")])?;
    document.insert(TAG_AVATAR, &[("name", "Grace Hopper"), ("variant", "pill")])?;
    document.insert(TAG_ACCENT_SELECTOR, &[])?;

    document.insert(
        TAG_ARTICLE_CARD,
        &[
            ("title", "Shadow roots without a browser"),
            ("synopsis", "Rendering encapsulated components ahead of time."),
            ("author-name", "Ada Lovelace"),
            ("date", hours_ago.as_str()),
            ("url", "/articles/shadow-roots"),
        ],
    )?;
    document.insert(
        TAG_ARTICLE_CARD_V2,
        &[
            ("title", "Theming with custom properties"),
            ("tag", "CSS"),
            ("author-name", "Grace Hopper"),
            ("date", days_ago.as_str()),
            ("comments", "12"),
            ("likes", "48"),
            ("url", "/articles/theming"),
        ],
    )?;
    document.insert(
        TAG_ARTICLE_CARD_V3,
        &[
            ("title", "Attribute-driven rendering"),
            ("synopsis", "Watched attributes, change callbacks and full re-renders."),
            ("author-name", "Alan Turing"),
            ("date", months_ago.as_str()),
            ("edited-date", minutes_ago.as_str()),
            ("url", "/articles/attributes"),
        ],
    )?;

    let modal = document.insert(TAG_MODAL, &[("title", "Welcome")])?;
    document.set_content(modal, "<p>Set the open attribute to show this dialog.</p>")?;

    Ok(())
}

/// Showcase page with one of each widget
pub fn gallery(document: &mut Document) -> Result<String, WidgetError> {
    populate_gallery(document)?;
    Ok(render_page(document, &format!("{APP_NAME} gallery")))
}
