//! Markup helpers shared by the widget renderers

/// Escape text for use in element content or a double-quoted attribute
#[must_use]
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a component's stylesheet and markup into one encapsulated output
#[must_use]
pub fn scoped(styles: &str, markup: &str) -> String {
    format!("<style>{}</style>\n{}", styles.trim(), markup.trim())
}

/// Render `name="value"` (or a bare `name` for empty values) with a leading space
#[must_use]
pub fn attribute(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!(" {name}")
    } else {
        format!(" {name}=\"{}\"", escape(value))
    }
}

/// Collect the class tokens used anywhere in `markup`
///
/// Only double-quoted `class` attributes are recognised, which is all the
/// widget renderers emit.
pub fn class_tokens(markup: &str) -> impl Iterator<Item = &str> {
    markup
        .split(" class=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(classes, _)| classes))
        .flat_map(str::split_whitespace)
}
