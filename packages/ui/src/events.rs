use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use crate::language::LanguageCode;
use crate::prefs::{Theme, ViewMode};

/// Named notification channels. One channel per preference kind plus the
/// two translation lifecycle signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    LanguageChanged,
    ThemeChanged,
    ViewModeChanged,
    TranslationsLoaded,
    TranslationsReady,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::LanguageChanged => "language-changed",
            Channel::ThemeChanged => "theme-changed",
            Channel::ViewModeChanged => "view-mode-changed",
            Channel::TranslationsLoaded => "translations-loaded",
            Channel::TranslationsReady => "translations-ready",
        }
    }
}

/// A notification with its payload: the new value for preference channels,
/// the registered language set for table updates.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LanguageChanged(LanguageCode),
    ThemeChanged(Theme),
    ViewModeChanged(ViewMode),
    TranslationsLoaded { languages: Vec<LanguageCode> },
    TranslationsReady,
}

impl Event {
    pub fn channel(&self) -> Channel {
        match self {
            Event::LanguageChanged(_) => Channel::LanguageChanged,
            Event::ThemeChanged(_) => Channel::ThemeChanged,
            Event::ViewModeChanged(_) => Channel::ViewModeChanged,
            Event::TranslationsLoaded { .. } => Channel::TranslationsLoaded,
            Event::TranslationsReady => Channel::TranslationsReady,
        }
    }
}

/// Handle returned by [`Broadcaster::subscribe`]. Dropping it does nothing;
/// removal is always explicit via `unsubscribe`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
    channel: Channel,
}

type Callback = Rc<RefCell<dyn FnMut(&Event)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    channels: HashMap<Channel, Vec<(u64, Callback)>>,
}

/// One-to-many push notification registry.
///
/// Subscribers on a channel run synchronously, in registration order, every
/// time an event is published there. A subscriber that panics is isolated:
/// the panic is logged and the remaining subscribers still run. Listeners
/// removed while a dispatch is in flight are not invoked.
///
/// Cloning yields another handle to the same registry. Single-threaded by
/// design; the whole core runs on the UI thread.
#[derive(Clone, Default)]
pub struct Broadcaster {
    inner: Rc<RefCell<Registry>>,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        channel: Channel,
        callback: impl FnMut(&Event) + 'static,
    ) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry
            .channels
            .entry(channel)
            .or_default()
            .push((id, Rc::new(RefCell::new(callback))));
        Subscription { id, channel }
    }

    /// Idempotent: unsubscribing twice, or after the channel emptied, is a
    /// no-op.
    pub fn unsubscribe(&self, subscription: &Subscription) {
        let mut registry = self.inner.borrow_mut();
        if let Some(subscribers) = registry.channels.get_mut(&subscription.channel) {
            subscribers.retain(|(id, _)| *id != subscription.id);
        }
    }

    pub fn publish(&self, event: Event) {
        let channel = event.channel();
        // Snapshot so subscribers may subscribe/unsubscribe re-entrantly
        // without holding the registry borrow across user code.
        let snapshot: Vec<(u64, Callback)> = self
            .inner
            .borrow()
            .channels
            .get(&channel)
            .map(|subscribers| subscribers.clone())
            .unwrap_or_default();

        for (id, callback) in snapshot {
            if !self.is_registered(channel, id) {
                continue;
            }
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                (&mut *callback.borrow_mut())(&event);
            }));
            if outcome.is_err() {
                tracing::error!(
                    channel = channel.as_str(),
                    "subscriber panicked during notification; continuing"
                );
            }
        }
    }

    pub fn subscriber_count(&self, channel: Channel) -> usize {
        self.inner
            .borrow()
            .channels
            .get(&channel)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn is_registered(&self, channel: Channel, id: u64) -> bool {
        self.inner
            .borrow()
            .channels
            .get(&channel)
            .is_some_and(|subscribers| subscribers.iter().any(|(sub_id, _)| *sub_id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn language_event(tag: &str) -> Event {
        Event::LanguageChanged(LanguageCode::new(tag))
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let broadcaster = Broadcaster::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = order.clone();
            broadcaster.subscribe(Channel::LanguageChanged, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        broadcaster.publish(language_event("da"));
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn panicking_subscriber_does_not_stop_the_rest() {
        let broadcaster = Broadcaster::new();
        let reached = Rc::new(RefCell::new(false));

        broadcaster.subscribe(Channel::ThemeChanged, |_| panic!("boom"));
        let reached_inner = reached.clone();
        broadcaster.subscribe(Channel::ThemeChanged, move |_| {
            *reached_inner.borrow_mut() = true;
        });

        broadcaster.publish(Event::ThemeChanged(Theme::Dark));
        assert!(*reached.borrow());
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let broadcaster = Broadcaster::new();
        let handle = broadcaster.subscribe(Channel::ViewModeChanged, |_| {});

        broadcaster.unsubscribe(&handle);
        broadcaster.unsubscribe(&handle);
        assert_eq!(broadcaster.subscriber_count(Channel::ViewModeChanged), 0);
    }

    #[test]
    fn listener_removed_mid_dispatch_is_skipped() {
        let broadcaster = Broadcaster::new();
        let second_ran = Rc::new(RefCell::new(false));

        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let removing = broadcaster.clone();
        let slot_inner = slot.clone();
        broadcaster.subscribe(Channel::LanguageChanged, move |_| {
            if let Some(handle) = slot_inner.borrow().as_ref() {
                removing.unsubscribe(handle);
            }
        });
        let second_inner = second_ran.clone();
        let handle = broadcaster.subscribe(Channel::LanguageChanged, move |_| {
            *second_inner.borrow_mut() = true;
        });
        *slot.borrow_mut() = Some(handle);

        broadcaster.publish(language_event("sv"));
        assert!(!*second_ran.borrow());
    }

    #[test]
    fn channels_are_isolated_from_each_other() {
        let broadcaster = Broadcaster::new();
        let count = Rc::new(RefCell::new(0));
        let count_inner = count.clone();
        broadcaster.subscribe(Channel::ThemeChanged, move |_| {
            *count_inner.borrow_mut() += 1;
        });

        broadcaster.publish(language_event("en"));
        assert_eq!(*count.borrow(), 0);
        broadcaster.publish(Event::ThemeChanged(Theme::Light));
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn channel_names_match_the_wire_spelling() {
        assert_eq!(Channel::LanguageChanged.as_str(), "language-changed");
        assert_eq!(Channel::TranslationsReady.as_str(), "translations-ready");
    }
}
