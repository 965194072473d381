use shadekit::ui::components::Widget;
use shadekit::ui::core::{Element, ElementId, HostContext, Interaction, InteractionKind};
use shadekit::WidgetError;

fn element(tag: &str) -> Element {
    Element::new(ElementId(0), Widget::from_tag(tag).unwrap())
}

#[test]
fn test_first_render_happens_on_mount() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");

    button.set_attribute("variant", "secondary", &ctx).unwrap();
    assert_eq!(button.render_count(), 0);
    assert_eq!(button.shadow_html(), "");

    button.mount(&ctx);
    assert!(button.is_mounted());
    assert_eq!(button.render_count(), 1);
    assert!(button.shadow_html().contains("button--secondary"));
}

#[test]
fn test_mount_is_idempotent() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);
    button.mount(&ctx);
    assert_eq!(button.render_count(), 1);
}

#[test]
fn test_render_is_idempotent() {
    let ctx = HostContext::new();
    let mut toggle = element("ui-toggle");
    toggle.set_attribute("label", "Dark mode", &ctx).unwrap();
    toggle.set_attribute("checked", "", &ctx).unwrap();
    toggle.mount(&ctx);

    let first = toggle.shadow_html().to_string();
    toggle.render(&ctx);
    toggle.render(&ctx);
    assert_eq!(toggle.render_count(), 3);
    assert_eq!(toggle.shadow_html(), first);
}

#[test]
fn test_watched_change_renders_once() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);

    button.set_attribute("variant", "secondary", &ctx).unwrap();
    assert_eq!(button.render_count(), 2);
    assert!(button.shadow_html().contains("button--secondary"));
}

#[test]
fn test_identical_value_does_not_render() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);

    button.set_attribute("variant", "secondary", &ctx).unwrap();
    button.set_attribute("variant", "secondary", &ctx).unwrap();
    assert_eq!(button.render_count(), 2);
}

#[test]
fn test_unwatched_attribute_never_renders() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);

    button.set_attribute("data-id", "42", &ctx).unwrap();
    button.set_attribute("data-id", "43", &ctx).unwrap();
    assert_eq!(button.render_count(), 1);
    assert_eq!(button.get_attribute("data-id"), Some("43"));
}

#[test]
fn test_presence_flag_transitions() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);

    // Absent to present renders
    button.set_attribute("disabled", "", &ctx).unwrap();
    assert_eq!(button.render_count(), 2);
    assert!(button.shadow_html().contains(" disabled"));

    // A different value is a change even though the flag stays set,
    // and the flag renders the same whatever its value
    let flagged = button.shadow_html().to_string();
    button.set_attribute("disabled", "true", &ctx).unwrap();
    assert_eq!(button.render_count(), 3);
    assert_eq!(button.shadow_html(), flagged);

    // Present to absent renders
    button.remove_attribute("disabled", &ctx).unwrap();
    assert_eq!(button.render_count(), 4);
    assert!(!button.shadow_html().contains(" disabled"));

    // Removing an absent attribute is not a change
    button.remove_attribute("disabled", &ctx).unwrap();
    assert_eq!(button.render_count(), 4);
}

#[test]
fn test_attribute_names_are_lowercased() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);
    button.set_attribute("Variant", "secondary", &ctx).unwrap();
    assert_eq!(button.get_attribute("variant"), Some("secondary"));
    assert_eq!(button.render_count(), 2);
}

#[test]
fn test_invalid_attribute_name() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    assert_eq!(
        button.set_attribute("bad name", "x", &ctx),
        Err(WidgetError::InvalidAttributeName("bad name".to_string()))
    );
    assert!(button.attributes().is_empty());
}

#[test]
fn test_render_replaces_output_and_rebinds_listeners() {
    let ctx = HostContext::new();
    let mut toggle = element("ui-toggle");
    toggle.mount(&ctx);

    // No label part yet, so only the wrapper listeners are bound
    assert!(toggle.scope().is_bound("toggle-wrapper", InteractionKind::Click));
    assert!(!toggle.scope().is_bound("toggle-label", InteractionKind::Click));

    toggle.set_attribute("label", "Dark mode", &ctx).unwrap();
    assert!(toggle.scope().is_bound("toggle-label", InteractionKind::Click));
    assert_eq!(toggle.scope().listeners().len(), 3);

    // Listeners still work after several re-renders
    toggle.set_attribute("label", "Light mode", &ctx).unwrap();
    let events = toggle.dispatch(&Interaction::click("toggle-label"), &ctx);
    assert_eq!(events.len(), 1);
    assert!(toggle.has_attribute("checked"));
}

#[test]
fn test_unmounted_element_ignores_interactions() {
    let ctx = HostContext::new();
    let mut toggle = element("ui-toggle");
    assert!(toggle.dispatch(&Interaction::click("toggle-wrapper"), &ctx).is_empty());

    toggle.mount(&ctx);
    toggle.unmount(&ctx);
    assert!(!toggle.is_mounted());
    assert!(toggle.scope().listeners().is_empty());
    assert!(toggle.dispatch(&Interaction::click("toggle-wrapper"), &ctx).is_empty());
    assert!(!toggle.has_attribute("checked"));
}

#[test]
fn test_changes_after_unmount_do_not_render() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.mount(&ctx);
    button.unmount(&ctx);
    button.set_attribute("variant", "secondary", &ctx).unwrap();
    assert_eq!(button.render_count(), 1);
}

#[test]
fn test_to_html_serializes_declarative_shadow_root() {
    let ctx = HostContext::new();
    let mut button = element("ui-button");
    button.set_attribute("variant", "secondary", &ctx).unwrap();
    button.set_attribute("disabled", "", &ctx).unwrap();
    button.set_content("Save & close");
    button.mount(&ctx);

    let html = button.to_html();
    assert!(html.starts_with(r#"<ui-button variant="secondary" disabled><template shadowrootmode="open"><style>"#));
    assert!(html.ends_with("</template>Save & close</ui-button>"));
}
