use std::cell::RefCell;
use std::rc::Rc;

use shadekit::ui::components::modal::{PART_BACKDROP, PART_CLOSE};
use shadekit::ui::core::{Interaction, WidgetEvent};
use shadekit::ui::Document;

#[test]
fn test_opening_locks_page_scroll() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("title", "Hello")]).unwrap();
    assert!(!doc.context().scroll_lock.is_locked());

    doc.set_attribute(id, "open", "").unwrap();
    assert!(doc.context().scroll_lock.is_locked());

    doc.remove_attribute(id, "open").unwrap();
    assert!(!doc.context().scroll_lock.is_locked());
}

#[test]
fn test_title_change_keeps_lock() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("open", "")]).unwrap();
    assert!(doc.context().scroll_lock.is_locked());

    doc.set_attribute(id, "title", "Renamed").unwrap();
    assert!(doc.context().scroll_lock.is_locked());
    assert!(doc.element(id).unwrap().shadow_html().contains(">Renamed</h2>"));
}

#[test]
fn test_close_button_closes_then_emits() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("open", "")]).unwrap();

    let locked_at_close = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&locked_at_close);
    let lock = doc.context().scroll_lock.clone();
    doc.subscribe(Some("close"), move |_| *sink.borrow_mut() = Some(lock.is_locked()));

    let events = doc.dispatch(id, &Interaction::click(PART_CLOSE)).unwrap();

    assert_eq!(events, vec![WidgetEvent::Close {}]);
    assert!(!doc.element(id).unwrap().has_attribute("open"));
    // The lock was already released when the event went out
    assert_eq!(*locked_at_close.borrow(), Some(false));
}

#[test]
fn test_backdrop_click_closes() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("open", "")]).unwrap();
    let events = doc.dispatch(id, &Interaction::click(PART_BACKDROP)).unwrap();
    assert_eq!(events, vec![WidgetEvent::Close {}]);
    assert!(!doc.context().scroll_lock.is_locked());
}

#[test]
fn test_click_inside_dialog_does_not_close() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("open", "")]).unwrap();

    let click = Interaction::click_path(&["modal-content", "modal", PART_BACKDROP]);
    let events = doc.dispatch(id, &click).unwrap();

    assert!(events.is_empty());
    assert!(doc.element(id).unwrap().has_attribute("open"));
    assert!(doc.context().scroll_lock.is_locked());
}

#[test]
fn test_removing_open_modal_releases_lock() {
    let mut doc = Document::new();
    let id = doc.insert("ui-modal", &[("open", "")]).unwrap();
    doc.remove(id).unwrap();
    assert!(!doc.context().scroll_lock.is_locked());
}
