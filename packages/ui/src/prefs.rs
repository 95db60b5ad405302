use std::cell::RefCell;
use std::rc::Rc;

use crate::events::{Broadcaster, Event};
use crate::language::LanguageCode;
use crate::storage::KeyValueStore;

/// Color theme. Closed domain: anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Root element class, e.g. `light-theme`.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }
}

/// Whether content areas render text or imagery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Text,
    Image,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Text => "text",
            ViewMode::Image => "image",
        }
    }

    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(ViewMode::Text),
            "image" => Some(ViewMode::Image),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Text => ViewMode::Image,
            ViewMode::Image => ViewMode::Text,
        }
    }
}

/// A preference kind: its storage key, its stored representation, and the
/// notification it emits on change.
pub trait PreferenceKind: Clone + PartialEq + 'static {
    const STORAGE_KEY: &'static str;

    fn to_stored(&self) -> String;
    fn from_stored(raw: &str) -> Option<Self>;
    fn changed(&self) -> Event;
}

impl PreferenceKind for LanguageCode {
    const STORAGE_KEY: &'static str = "lumen:language";

    fn to_stored(&self) -> String {
        self.as_str().to_string()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(LanguageCode::new(trimmed))
        }
    }

    fn changed(&self) -> Event {
        Event::LanguageChanged(self.clone())
    }
}

impl PreferenceKind for Theme {
    const STORAGE_KEY: &'static str = "lumen:theme";

    fn to_stored(&self) -> String {
        self.as_str().to_string()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        Theme::from_str(raw)
    }

    fn changed(&self) -> Event {
        Event::ThemeChanged(*self)
    }
}

impl PreferenceKind for ViewMode {
    const STORAGE_KEY: &'static str = "lumen:view";

    fn to_stored(&self) -> String {
        self.as_str().to_string()
    }

    fn from_stored(raw: &str) -> Option<Self> {
        ViewMode::from_str(raw)
    }

    fn changed(&self) -> Event {
        Event::ViewModeChanged(*self)
    }
}

/// One user preference, owned here and mutated only through [`set`].
///
/// `set` persists before it notifies, so a subscriber reading storage from
/// its callback always observes the new value.
///
/// [`set`]: Preference::set
#[derive(Clone)]
pub struct Preference<K: PreferenceKind> {
    value: Rc<RefCell<K>>,
    storage: Rc<dyn KeyValueStore>,
    events: Broadcaster,
}

impl<K: PreferenceKind> Preference<K> {
    /// Initialize from storage, falling back to `default` when nothing is
    /// stored or the stored value does not parse.
    pub fn load(storage: Rc<dyn KeyValueStore>, events: Broadcaster, default: K) -> Self {
        let initial = storage
            .read(K::STORAGE_KEY)
            .and_then(|raw| K::from_stored(&raw))
            .unwrap_or(default);
        Self {
            value: Rc::new(RefCell::new(initial)),
            storage,
            events,
        }
    }

    pub fn get(&self) -> K {
        self.value.borrow().clone()
    }

    /// No-op when `value` equals the current one. Otherwise: update memory,
    /// best-effort persist, then emit exactly one notification.
    pub fn set(&self, value: K) {
        if *self.value.borrow() == value {
            return;
        }
        *self.value.borrow_mut() = value.clone();
        if let Err(err) = self.storage.write(K::STORAGE_KEY, &value.to_stored()) {
            tracing::warn!(
                key = K::STORAGE_KEY,
                error = %err,
                "unable to persist preference; keeping the value in memory"
            );
        }
        self.events.publish(value.changed());
    }

    /// Replace the in-memory value without persisting or notifying. Used
    /// for detected defaults (runtime locale, OS color scheme): detection
    /// must not overwrite what the user may later store explicitly.
    pub fn prime(&self, value: K) {
        *self.value.borrow_mut() = value;
    }

    pub fn is_persisted(&self) -> bool {
        self.storage
            .read(K::STORAGE_KEY)
            .and_then(|raw| K::from_stored(&raw))
            .is_some()
    }
}
