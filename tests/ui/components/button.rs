use shadekit::ui::Document;

#[test]
fn test_button_defaults_to_primary() {
    let mut doc = Document::new();
    let id = doc.insert("ui-button", &[]).unwrap();
    let html = doc.element(id).unwrap().shadow_html().to_string();
    assert!(html.contains(r#"class="button button--primary""#));
    assert!(html.contains("<slot></slot>"));
}

#[test]
fn test_empty_variant_falls_back_to_default() {
    let mut doc = Document::new();
    let id = doc.insert("ui-button", &[("variant", "")]).unwrap();
    assert!(doc.element(id).unwrap().shadow_html().contains("button--primary"));
}

#[test]
fn test_attribute_values_are_escaped() {
    let mut doc = Document::new();
    let id = doc.insert("ui-button", &[("variant", "\"><script>")]).unwrap();
    let html = doc.element(id).unwrap().shadow_html().to_string();
    assert!(!html.contains("<script>"));
    assert!(html.contains("button--&quot;&gt;&lt;script&gt;"));
}

#[test]
fn test_card_classes() {
    let mut doc = Document::new();
    let id = doc.insert("ui-card", &[("elevation", "high")]).unwrap();
    let html = doc.element(id).unwrap().shadow_html().to_string();
    assert!(html.contains(r#"class="card card--high card--padding-medium""#));
}

#[test]
fn test_buttons_have_no_listeners() {
    let mut doc = Document::new();
    let id = doc.insert("ui-button", &[]).unwrap();
    assert!(doc.element(id).unwrap().scope().listeners().is_empty());
}
