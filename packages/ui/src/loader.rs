use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::HashMap;

use crate::context::DesignSystem;
use crate::events::Event;
use crate::translations::TranslationTable;

/// Conventional file names probed, in order, when no explicit source is
/// configured. Absence of all of them is the expected fallback path.
pub const DEFAULT_TRANSLATION_SOURCES: [&str; 12] = [
    "./keys.json",
    "./tekst.json",
    "./tekster.json",
    "./language.json",
    "./languages.json",
    "./translations.json",
    "./translate.json",
    "./i18n.json",
    "./locales.json",
    "./strings.json",
    "./text.json",
    "./texts.json",
];

/// Fetch seam so tests can feed documents in without a network.
#[async_trait(?Send)]
pub trait TranslationFetcher {
    async fn fetch(&self, source: &str) -> Result<TranslationTable>;
}

/// Plain GET fetcher. One request per candidate, no retry, no backoff.
#[derive(Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl TranslationFetcher for HttpFetcher {
    async fn fetch(&self, source: &str) -> Result<TranslationTable> {
        let response = self.client.get(source).send().await?;
        if !response.status().is_success() {
            bail!("{source} answered {}", response.status());
        }
        let parsed: HashMap<String, HashMap<String, String>> = response.json().await?;
        TranslationTable::from_map(parsed)
    }
}

/// Try the candidate sources in order and install the first valid document
/// as a wholesale replacement of the table. Runs at most once per session;
/// later calls return `false` immediately.
///
/// On success the cascade mirrors a language switch so every component
/// refreshes: `translations-ready`, then `translations-loaded`, then a
/// `language-changed` echo of the current language. On total absence the
/// bundled table stays authoritative for the session.
pub async fn load_external_translations(
    ds: &DesignSystem,
    fetcher: &dyn TranslationFetcher,
    sources: &[&str],
) -> bool {
    if !ds.claim_external_attempt() {
        return false;
    }

    for &source in sources {
        let table = match fetcher.fetch(source).await {
            Ok(table) => table,
            Err(err) => {
                tracing::debug!(source, error = %err, "translation source unavailable");
                continue;
            }
        };

        ds.translations().replace(table);
        tracing::info!(
            source,
            languages = ds.translations().languages().len(),
            "external translations installed"
        );

        let events = ds.events();
        events.publish(Event::TranslationsReady);
        events.publish(Event::TranslationsLoaded {
            languages: ds.translations().languages(),
        });
        events.publish(Event::LanguageChanged(ds.language()));
        return true;
    }

    tracing::info!(
        candidates = sources.len(),
        "no external translations found; keeping the bundled table"
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Channel;
    use crate::language::LanguageCode;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Serves canned documents keyed by source path.
    struct StubFetcher {
        documents: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn new(documents: &[(&str, &str)]) -> Self {
            Self {
                documents: documents
                    .iter()
                    .map(|(source, body)| (source.to_string(), body.to_string()))
                    .collect(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TranslationFetcher for StubFetcher {
        async fn fetch(&self, source: &str) -> Result<TranslationTable> {
            self.requests.borrow_mut().push(source.to_string());
            match self.documents.get(source) {
                Some(body) => TranslationTable::from_json(body),
                None => bail!("404"),
            }
        }
    }

    fn design_system() -> DesignSystem {
        DesignSystem::new(Rc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn first_valid_source_wins() {
        let ds = design_system();
        let fetcher = StubFetcher::new(&[
            ("./tekst.json", r#"{"en": {"hello": "Howdy"}}"#),
            ("./language.json", r#"{"en": {"hello": "Never"}}"#),
        ]);

        let loaded =
            load_external_translations(&ds, &fetcher, &["./keys.json", "./tekst.json", "./language.json"])
                .await;
        assert!(loaded);
        assert_eq!(ds.resolve("hello"), "Howdy");
        // The winning source ends the probe sequence.
        assert_eq!(
            *fetcher.requests.borrow(),
            vec!["./keys.json".to_string(), "./tekst.json".to_string()]
        );
    }

    #[tokio::test]
    async fn malformed_sources_keep_the_existing_table() {
        let ds = design_system();
        let fetcher = StubFetcher::new(&[("./keys.json", r#"{"en": "flat string"}"#)]);

        let loaded = load_external_translations(&ds, &fetcher, &["./keys.json"]).await;
        assert!(!loaded);
        // Bundled table still answers.
        assert_eq!(ds.resolve("nav.home"), "Home");
    }

    #[tokio::test]
    async fn empty_documents_are_rejected() {
        let ds = design_system();
        let fetcher = StubFetcher::new(&[("./keys.json", "{}")]);

        assert!(!load_external_translations(&ds, &fetcher, &["./keys.json"]).await);
        assert_eq!(ds.resolve("nav.home"), "Home");
    }

    #[tokio::test]
    async fn load_runs_at_most_once_per_session() {
        let ds = design_system();
        let fetcher = StubFetcher::new(&[("./keys.json", r#"{"en": {"hello": "Howdy"}}"#)]);

        assert!(load_external_translations(&ds, &fetcher, &["./keys.json"]).await);
        assert!(!load_external_translations(&ds, &fetcher, &["./keys.json"]).await);
        assert_eq!(fetcher.requests.borrow().len(), 1);
    }

    #[tokio::test]
    async fn success_emits_the_refresh_cascade_in_order() {
        let ds = design_system();
        ds.set_language(LanguageCode::new("da"));
        let fetcher = StubFetcher::new(&[("./keys.json", r#"{"da": {"hello": "Hej"}}"#)]);

        let order = Rc::new(RefCell::new(Vec::new()));
        for channel in [
            Channel::TranslationsReady,
            Channel::TranslationsLoaded,
            Channel::LanguageChanged,
        ] {
            let order = order.clone();
            ds.events().subscribe(channel, move |event| {
                order.borrow_mut().push(event.channel().as_str());
            });
        }

        assert!(load_external_translations(&ds, &fetcher, &["./keys.json"]).await);
        assert_eq!(
            *order.borrow(),
            vec!["translations-ready", "translations-loaded", "language-changed"]
        );
        // The replacement was wholesale: bundled-only keys are gone.
        assert_eq!(ds.resolve("nav.home"), "nav.home");
        assert_eq!(ds.resolve("hello"), "Hej");
    }
}
