use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::Serialize;

use super::actions::WidgetEvent;
use super::element::ElementId;

/// A published event together with its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEnvelope {
    pub source: ElementId,
    pub tag: &'static str,
    #[serde(rename = "type")]
    pub name: &'static str,
    pub detail: serde_json::Value,
    #[serde(skip)]
    pub event: WidgetEvent,
}

impl EventEnvelope {
    pub fn new(source: ElementId, tag: &'static str, event: WidgetEvent) -> Self {
        Self {
            source,
            tag,
            name: event.name(),
            detail: event.detail(),
            event,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&EventEnvelope)>;

struct Subscriber {
    id: SubscriptionId,
    filter: Option<String>,
    callback: Callback,
}

#[derive(Default)]
struct BusInner {
    subscribers: Vec<Subscriber>,
    removed: Vec<SubscriptionId>,
    pending: VecDeque<EventEnvelope>,
    publishing: bool,
    next_id: u64,
}

/// Explicit publish/subscribe channel between widgets and their host
///
/// Cloning shares the subscriber list. Subscribers may subscribe or
/// unsubscribe from inside a callback; the change applies from the next
/// publish. An event published from inside a callback is queued and
/// delivered once the current event has reached every subscriber.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for events named `filter`, or for all events
    pub fn subscribe<F>(&self, filter: Option<&str>, callback: F) -> SubscriptionId
    where
        F: FnMut(&EventEnvelope) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push(Subscriber {
            id,
            filter: filter.map(str::to_string),
            callback: Box::new(callback),
        });
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|subscriber| subscriber.id != id);
        if inner.subscribers.len() == before {
            // Possibly mid-publish; drop it when the list comes back.
            inner.removed.push(id);
        }
    }

    pub fn publish(&self, envelope: &EventEnvelope) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.publishing {
                log::debug!("queue {} from {} ({})", envelope.name, envelope.source, envelope.tag);
                inner.pending.push_back(envelope.clone());
                return;
            }
            inner.publishing = true;
        }

        self.deliver(envelope);
        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            match next {
                Some(queued) => self.deliver(&queued),
                None => break,
            }
        }

        self.inner.borrow_mut().publishing = false;
    }

    fn deliver(&self, envelope: &EventEnvelope) {
        let mut subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        log::debug!("publish {} from {} ({})", envelope.name, envelope.source, envelope.tag);

        for subscriber in subscribers.iter_mut() {
            if subscriber.filter.as_deref().map_or(true, |name| name == envelope.name) {
                (subscriber.callback)(envelope);
            }
        }

        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed);
        subscribers.retain(|subscriber| !removed.contains(&subscriber.id));
        subscribers.append(&mut inner.subscribers);
        inner.subscribers = subscribers;
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
