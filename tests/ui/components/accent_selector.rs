use shadekit::ui::core::{Interaction, WidgetEvent};
use shadekit::ui::Document;
use shadekit::utils::color::AccentColor;

#[test]
fn test_renders_every_swatch() {
    let mut doc = Document::new();
    let id = doc.insert("ui-accent-selector", &[]).unwrap();
    let element = doc.element(id).unwrap();
    let html = element.shadow_html();

    for color in AccentColor::ALL {
        assert!(html.contains(&format!(r#"class="color-button color-{}""#, color.name())));
        assert!(html.contains(&format!("background-color: {};", color.hex())));
    }
    assert!(!html.contains(" selected\""));
    assert_eq!(element.scope().listeners().len(), AccentColor::ALL.len());
}

#[test]
fn test_click_sets_theme_and_selects_swatch() {
    let mut doc = Document::new();
    let id = doc.insert("ui-accent-selector", &[]).unwrap();

    let events = doc.dispatch(id, &Interaction::click("color-orange")).unwrap();

    assert_eq!(
        events,
        vec![WidgetEvent::AccentColorChange {
            name: "orange".to_string(),
            value: "#FA9133".to_string(),
        }]
    );
    assert_eq!(doc.context().theme.get("--color-accent").as_deref(), Some("#FA9133"));
    assert_eq!(doc.context().theme.get("--color-accent-name").as_deref(), Some("orange"));

    let element = doc.element(id).unwrap();
    assert!(element.shadow_html().contains(r#"class="color-button color-orange selected""#));
    assert_eq!(element.render_count(), 2);
}

#[test]
fn test_selection_moves() {
    let mut doc = Document::new();
    let id = doc.insert("ui-accent-selector", &[]).unwrap();
    doc.dispatch(id, &Interaction::click("color-orange")).unwrap();
    doc.dispatch(id, &Interaction::click("color-cyan")).unwrap();

    let html = doc.element(id).unwrap().shadow_html().to_string();
    assert!(html.contains(r#"class="color-button color-cyan selected""#));
    assert!(html.contains(r#"class="color-button color-orange""#));
    assert_eq!(doc.context().theme.accent(), Some(AccentColor::Cyan));
}

#[test]
fn test_last_selector_wins() {
    let mut doc = Document::new();
    let first = doc.insert("ui-accent-selector", &[]).unwrap();
    let second = doc.insert("ui-accent-selector", &[]).unwrap();

    doc.dispatch(first, &Interaction::click("color-pink")).unwrap();
    doc.dispatch(second, &Interaction::click("color-yellow")).unwrap();

    assert_eq!(doc.context().theme.accent(), Some(AccentColor::Yellow));
}
