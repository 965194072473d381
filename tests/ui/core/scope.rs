use shadekit::ui::core::{InteractionKind, RenderScope};

fn scope() -> RenderScope {
    let mut scope = RenderScope::new();
    scope.replace(r#"<div class="modal-backdrop"><button class="modal-close"></button></div>"#.to_string());
    scope
}

#[test]
fn test_bind_present_part() {
    let mut scope = scope();
    assert!(scope.has_part("modal-close"));
    assert!(scope.bind("modal-close", InteractionKind::Click));
    assert!(scope.is_bound("modal-close", InteractionKind::Click));
    assert!(!scope.is_bound("modal-close", InteractionKind::KeyDown));
}

#[test]
fn test_missing_part_is_skipped() {
    let mut scope = scope();
    assert!(!scope.bind("toggle-label", InteractionKind::Click));
    assert!(scope.listeners().is_empty());
}

#[test]
fn test_duplicate_bind_keeps_one_listener() {
    let mut scope = scope();
    scope.bind("modal-close", InteractionKind::Click);
    scope.bind("modal-close", InteractionKind::Click);
    assert_eq!(scope.listeners().len(), 1);
}

#[test]
fn test_replace_discards_listeners() {
    let mut scope = scope();
    scope.bind("modal-close", InteractionKind::Click);
    scope.replace(r#"<div class="modal-backdrop"></div>"#.to_string());
    assert!(scope.listeners().is_empty());
    assert!(!scope.has_part("modal-close"));
}

#[test]
fn test_part_inside_style_text_is_not_a_part() {
    let mut scope = RenderScope::new();
    scope.replace("<style>.modal-close { color: red; }</style>\n<div class=\"modal\"></div>".to_string());
    assert!(!scope.has_part("modal-close"));
}
