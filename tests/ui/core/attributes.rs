use shadekit::ui::core::attributes::is_valid_name;
use shadekit::ui::core::Attributes;

#[test]
fn test_set_reports_old_and_new_values() {
    let mut attrs = Attributes::new();
    let change = attrs.set("variant", "primary");
    assert_eq!(change.old_value, None);
    assert_eq!(change.new_value.as_deref(), Some("primary"));
    assert!(!change.is_noop());

    let change = attrs.set("variant", "primary");
    assert!(change.is_noop());
}

#[test]
fn test_remove() {
    let mut attrs: Attributes = [("open", "")].into_iter().collect();
    let change = attrs.remove("open").unwrap();
    assert_eq!(change.old_value.as_deref(), Some(""));
    assert_eq!(change.new_value, None);
    assert!(attrs.remove("open").is_none());
}

#[test]
fn test_presence_flags_ignore_values() {
    let attrs: Attributes = [("disabled", ""), ("checked", "false")].into_iter().collect();
    assert!(attrs.has("disabled"));
    assert!(attrs.has("checked"));
    assert!(!attrs.has("open"));
}

#[test]
fn test_defaults_apply_to_missing_and_empty() {
    let attrs: Attributes = [("variant", "")].into_iter().collect();
    assert_eq!(attrs.get_or("variant", "primary"), "primary");
    assert_eq!(attrs.get_or("size", "desktop"), "desktop");
    assert_eq!(attrs.text("name"), "");
}

#[test]
fn test_insertion_order_is_kept() {
    let mut attrs = Attributes::new();
    attrs.set("b", "1");
    attrs.set("a", "2");
    attrs.set("b", "3");
    let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(attrs.len(), 2);
}

#[test]
fn test_name_validation() {
    assert!(is_valid_name("data-id"));
    assert!(is_valid_name("aria-label"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("two words"));
    assert!(!is_valid_name("a=b"));
}
