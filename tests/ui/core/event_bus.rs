use std::cell::RefCell;
use std::rc::Rc;

use shadekit::ui::core::{ElementId, EventBus, EventEnvelope, WidgetEvent};

fn change(checked: bool) -> EventEnvelope {
    EventEnvelope::new(ElementId(3), "ui-toggle", WidgetEvent::Change { checked })
}

#[test]
fn test_filtered_and_catch_all_subscribers() {
    let bus = EventBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let all = Rc::clone(&seen);
    bus.subscribe(None, move |envelope| all.borrow_mut().push(format!("all:{}", envelope.name)));
    let changes = Rc::clone(&seen);
    bus.subscribe(Some("change"), move |envelope| {
        changes.borrow_mut().push(format!("change:{}", envelope.detail))
    });
    let closes = Rc::clone(&seen);
    bus.subscribe(Some("close"), move |_| closes.borrow_mut().push("close".to_string()));

    bus.publish(&change(true));

    assert_eq!(
        *seen.borrow(),
        vec!["all:change".to_string(), "change:{\"checked\":true}".to_string()]
    );
}

#[test]
fn test_unsubscribe() {
    let bus = EventBus::new();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = bus.subscribe(None, move |_| *counter.borrow_mut() += 1);

    bus.publish(&change(true));
    bus.unsubscribe(id);
    bus.publish(&change(false));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(bus.subscriber_count(), 0);
}

#[test]
fn test_subscribing_during_publish_applies_next_time() {
    let bus = EventBus::new();
    let count = Rc::new(RefCell::new(0));

    let inner_bus = bus.clone();
    let inner_count = Rc::clone(&count);
    bus.subscribe(None, move |_| {
        let counter = Rc::clone(&inner_count);
        inner_bus.subscribe(None, move |_| *counter.borrow_mut() += 1);
    });

    bus.publish(&change(true));
    assert_eq!(*count.borrow(), 0);
    assert_eq!(bus.subscriber_count(), 2);

    bus.publish(&change(true));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_unsubscribing_self_during_publish() {
    let bus = EventBus::new();
    let count = Rc::new(RefCell::new(0));
    let id = Rc::new(RefCell::new(None));

    let inner_bus = bus.clone();
    let inner_id = Rc::clone(&id);
    let counter = Rc::clone(&count);
    let subscription = bus.subscribe(None, move |_| {
        *counter.borrow_mut() += 1;
        if let Some(id) = *inner_id.borrow() {
            inner_bus.unsubscribe(id);
        }
    });
    *id.borrow_mut() = Some(subscription);

    bus.publish(&change(true));
    bus.publish(&change(true));
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_envelope_json() {
    let json = serde_json::to_value(change(false)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "source": 3,
            "tag": "ui-toggle",
            "type": "change",
            "detail": {"checked": false}
        })
    );
}

#[test]
fn test_publishing_from_a_callback_is_delivered_after_the_current_event() {
    let bus = EventBus::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let relay = bus.clone();
    bus.subscribe(Some("change"), move |_| {
        relay.publish(&EventEnvelope::new(ElementId(4), "ui-modal", WidgetEvent::Close {}));
    });
    let log = Rc::clone(&seen);
    bus.subscribe(None, move |envelope| log.borrow_mut().push(envelope.name));

    bus.publish(&change(true));

    assert_eq!(*seen.borrow(), vec!["change", "close"]);
    assert_eq!(bus.subscriber_count(), 2);
}
