use anyhow::{bail, Result};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::events::{Broadcaster, Event};
use crate::language::{sort_language_codes, LanguageCode};

/// Language → (key → string) dictionary. Language keys are stored in
/// normalized (lowercase) form so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    languages: HashMap<String, HashMap<String, String>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the external JSON schema: an object whose top-level keys
    /// are language codes and whose values are flat string dictionaries.
    /// Rejects documents with zero languages; shape errors come from serde.
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)?;
        Self::from_map(parsed)
    }

    pub fn from_map(parsed: HashMap<String, HashMap<String, String>>) -> Result<Self> {
        if parsed.is_empty() {
            bail!("translation document contains no languages");
        }
        let mut table = Self::new();
        for (language, entries) in parsed {
            table.merge(&LanguageCode::new(language), entries);
        }
        Ok(table)
    }

    pub fn insert(&mut self, language: &LanguageCode, key: &str, value: &str) {
        self.languages
            .entry(language.normalized())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Additive deep merge: creates the language if absent, overwrites
    /// duplicate keys, never deletes.
    pub fn merge(&mut self, language: &LanguageCode, entries: HashMap<String, String>) {
        let dictionary = self.languages.entry(language.normalized()).or_default();
        for (key, value) in entries {
            dictionary.insert(key, value);
        }
    }

    pub fn get(&self, language: &LanguageCode, key: &str) -> Option<&str> {
        self.languages
            .get(&language.normalized())
            .and_then(|dictionary| dictionary.get(key))
            .map(String::as_str)
    }

    pub fn contains_language(&self, language: &LanguageCode) -> bool {
        self.languages.contains_key(&language.normalized())
    }

    pub fn languages(&self) -> Vec<LanguageCode> {
        self.languages.keys().cloned().map(LanguageCode::new).collect()
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Whether any table has been installed yet. Consumers resolving against
/// `Loading` get the key-echo fallback; there is no timeout anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Loading,
    Ready(TranslationTable),
}

impl Catalog {
    fn table(&self) -> Option<&TranslationTable> {
        match self {
            Catalog::Loading => None,
            Catalog::Ready(table) => Some(table),
        }
    }
}

/// The process-wide translation catalog and its resolution rules.
///
/// Lives for the lifetime of the process: installed once from the bundled
/// source, optionally replaced wholesale by one successful external fetch,
/// extended by explicit merges, never torn down.
pub struct TranslationStore {
    catalog: RefCell<Catalog>,
    default_language: LanguageCode,
    events: Broadcaster,
}

impl TranslationStore {
    pub fn new(default_language: LanguageCode, events: Broadcaster) -> Self {
        Self {
            catalog: RefCell::new(Catalog::Loading),
            default_language,
            events,
        }
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    pub fn is_ready(&self) -> bool {
        matches!(&*self.catalog.borrow(), Catalog::Ready(_))
    }

    /// Install the base table. Idempotent once populated: a later install
    /// wins only while the catalog is still empty.
    pub fn install(&self, table: TranslationTable) {
        let mut catalog = self.catalog.borrow_mut();
        let occupied = catalog
            .table()
            .map(|existing| !existing.is_empty())
            .unwrap_or(false);
        if occupied {
            tracing::debug!("translation table already installed; ignoring");
            return;
        }
        *catalog = Catalog::Ready(table);
    }

    /// Wholesale replacement by a validated external source. The loader is
    /// the only caller and emits the notification cascade itself.
    pub fn replace(&self, table: TranslationTable) {
        *self.catalog.borrow_mut() = Catalog::Ready(table);
    }

    /// Merge entries into one language's dictionary and announce the new
    /// language set on `translations-loaded`.
    pub fn merge(&self, language: &LanguageCode, entries: HashMap<String, String>) {
        {
            let mut catalog = self.catalog.borrow_mut();
            match &mut *catalog {
                Catalog::Ready(table) => table.merge(language, entries),
                Catalog::Loading => {
                    let mut table = TranslationTable::new();
                    table.merge(language, entries);
                    *catalog = Catalog::Ready(table);
                }
            }
        }
        self.events.publish(Event::TranslationsLoaded {
            languages: self.languages(),
        });
    }

    /// Registered languages, priority-ranked then alphabetical.
    pub fn languages(&self) -> Vec<LanguageCode> {
        let mut codes = self
            .catalog
            .borrow()
            .table()
            .map(TranslationTable::languages)
            .unwrap_or_default();
        sort_language_codes(&mut codes);
        codes
    }

    /// Best-available string for `key`: exact language, else the default
    /// language, else the key itself as a visible placeholder. Never fails
    /// a render; a total miss is a debug-level diagnostic.
    pub fn resolve(&self, key: &str, language: &LanguageCode) -> String {
        let catalog = self.catalog.borrow();
        let Some(table) = catalog.table() else {
            tracing::debug!(key, "translations not loaded yet; echoing key");
            return key.to_string();
        };

        if let Some(value) = table.get(language, key) {
            return value.to_string();
        }

        if language.normalized() != self.default_language.normalized() {
            if let Some(value) = table.get(&self.default_language, key) {
                return value.to_string();
            }
        }

        tracing::debug!(key, language = language.as_str(), "no translation found");
        key.to_string()
    }

    /// Whether `key` resolves without falling through to the key echo.
    pub fn has_translation(&self, key: &str, language: &LanguageCode) -> bool {
        let catalog = self.catalog.borrow();
        let Some(table) = catalog.table() else {
            return false;
        };
        if table.get(language, key).is_some() {
            return true;
        }
        language.normalized() != self.default_language.normalized()
            && table.get(&self.default_language, key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(table: TranslationTable) -> TranslationStore {
        let store = TranslationStore::new(LanguageCode::new("en"), Broadcaster::new());
        store.install(table);
        store
    }

    fn basic_table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert(&LanguageCode::new("en"), "hello", "Hello");
        table.insert(&LanguageCode::new("da"), "hello", "Hej");
        table
    }

    #[test]
    fn exact_match_wins() {
        let store = store_with(basic_table());
        assert_eq!(store.resolve("hello", &LanguageCode::new("da")), "Hej");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let store = store_with(basic_table());
        assert_eq!(store.resolve("hello", &LanguageCode::new("DA")), "Hej");
    }

    #[test]
    fn missing_key_falls_back_to_default_language() {
        let mut table = basic_table();
        table.insert(&LanguageCode::new("en"), "farewell", "Goodbye");
        let store = store_with(table);
        assert_eq!(store.resolve("farewell", &LanguageCode::new("da")), "Goodbye");
    }

    #[test]
    fn missing_everywhere_echoes_the_key() {
        let store = store_with(basic_table());
        assert_eq!(store.resolve("missing", &LanguageCode::new("da")), "missing");
    }

    #[test]
    fn resolving_while_loading_echoes_the_key() {
        let store = TranslationStore::new(LanguageCode::new("en"), Broadcaster::new());
        assert!(!store.is_ready());
        assert_eq!(store.resolve("hello", &LanguageCode::new("en")), "hello");
    }

    #[test]
    fn install_is_idempotent_once_populated() {
        let store = store_with(basic_table());
        let mut other = TranslationTable::new();
        other.insert(&LanguageCode::new("en"), "hello", "Howdy");
        store.install(other);
        assert_eq!(store.resolve("hello", &LanguageCode::new("en")), "Hello");
    }

    #[test]
    fn install_wins_while_catalog_is_empty() {
        let store = TranslationStore::new(LanguageCode::new("en"), Broadcaster::new());
        store.install(TranslationTable::new());
        store.install(basic_table());
        assert_eq!(store.resolve("hello", &LanguageCode::new("en")), "Hello");
    }

    #[test]
    fn merge_is_additive_and_overwrites_duplicates() {
        let store = store_with(basic_table());
        let da = LanguageCode::new("da");

        store.merge(&da, HashMap::from([("a".to_string(), "1".to_string())]));
        store.merge(&da, HashMap::from([("b".to_string(), "2".to_string())]));
        assert_eq!(store.resolve("a", &da), "1");
        assert_eq!(store.resolve("b", &da), "2");
        assert_eq!(store.resolve("hello", &da), "Hej");

        store.merge(&da, HashMap::from([("a".to_string(), "one".to_string())]));
        assert_eq!(store.resolve("a", &da), "one");
    }

    #[test]
    fn merge_creates_an_absent_language() {
        let store = store_with(basic_table());
        let nb = LanguageCode::new("nb");
        store.merge(&nb, HashMap::from([("hello".to_string(), "Hei".to_string())]));
        assert_eq!(store.resolve("hello", &nb), "Hei");
    }

    #[test]
    fn merge_announces_the_language_set() {
        use crate::events::Channel;
        use std::cell::RefCell;
        use std::rc::Rc;

        let events = Broadcaster::new();
        let store = TranslationStore::new(LanguageCode::new("en"), events.clone());
        store.install(basic_table());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_inner = seen.clone();
        events.subscribe(Channel::TranslationsLoaded, move |event| {
            if let Event::TranslationsLoaded { languages } = event {
                *seen_inner.borrow_mut() = languages.clone();
            }
        });

        store.merge(
            &LanguageCode::new("sv"),
            HashMap::from([("hello".to_string(), "Hej".to_string())]),
        );
        let codes: Vec<String> = seen
            .borrow()
            .iter()
            .map(|code| code.as_str().to_string())
            .collect();
        assert_eq!(codes, vec!["da", "sv", "en"]);
    }

    #[test]
    fn languages_are_priority_ordered() {
        let mut table = TranslationTable::new();
        for code in ["zh", "en", "da"] {
            table.merge(&LanguageCode::new(code), HashMap::new());
        }
        let store = store_with(table);
        let codes: Vec<String> = store
            .languages()
            .iter()
            .map(|code| code.as_str().to_string())
            .collect();
        assert_eq!(codes, vec!["da", "zh", "en"]);
    }

    #[test]
    fn from_json_rejects_empty_documents() {
        assert!(TranslationTable::from_json("{}").is_err());
        assert!(TranslationTable::from_json(r#"{"en": "not a map"}"#).is_err());
        assert!(TranslationTable::from_json(r#"{"en": {"hello": "Hello"}}"#).is_ok());
    }

    #[test]
    fn has_translation_follows_the_fallback_chain() {
        let mut table = basic_table();
        table.insert(&LanguageCode::new("en"), "only_en", "English only");
        let store = store_with(table);
        let da = LanguageCode::new("da");
        assert!(store.has_translation("hello", &da));
        assert!(store.has_translation("only_en", &da));
        assert!(!store.has_translation("missing", &da));
    }
}
