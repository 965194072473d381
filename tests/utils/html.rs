use shadekit::utils::html::{attribute, class_tokens, escape, scoped};

#[test]
fn test_escape_markup_characters() {
    assert_eq!(escape("<script>alert('x')</script>"), "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
}

#[test]
fn test_attribute_rendering() {
    assert_eq!(attribute("variant", "pill"), " variant=\"pill\"");
    assert_eq!(attribute("disabled", ""), " disabled");
    assert_eq!(attribute("title", "a \"b\""), " title=\"a &quot;b&quot;\"");
}

#[test]
fn test_scoped_puts_styles_first() {
    let output = scoped("\n.a { color: red; }\n", "\n<div class=\"a\"></div>\n");
    assert_eq!(output, "<style>.a { color: red; }</style>\n<div class=\"a\"></div>");
}

#[test]
fn test_class_tokens() {
    let markup = r#"<div class="toggle-wrapper disabled"><span class="toggle-slider"></span></div>"#;
    let tokens: Vec<&str> = class_tokens(markup).collect();
    assert_eq!(tokens, vec!["toggle-wrapper", "disabled", "toggle-slider"]);
}
