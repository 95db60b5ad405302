use std::cell::Cell;
use std::rc::Rc;

use crate::events::Broadcaster;
use crate::language::{LanguageCode, DEFAULT_LANGUAGE};
use crate::prefs::{Preference, Theme, ViewMode};
use crate::storage::KeyValueStore;
use crate::translations::{TranslationStore, TranslationTable};

/// Translations compiled into the library. Applications can override them
/// wholesale with an external source; see the loader.
const BUNDLED_TRANSLATIONS: &str = include_str!("../assets/keys.json");

fn bundled_table() -> TranslationTable {
    TranslationTable::from_json(BUNDLED_TRANSLATIONS).unwrap_or_else(|err| {
        tracing::error!(error = %err, "bundled translations failed to parse");
        TranslationTable::new()
    })
}

/// The explicitly constructed design-system context: the translation
/// catalog, the three user preferences and the broadcaster that ties the
/// components to them.
///
/// Built once by the application entry point (normally `DsProvider`) and
/// handed to components through context — there is no module-level state.
/// Cloning yields another handle to the same instance.
#[derive(Clone)]
pub struct DesignSystem {
    translations: Rc<TranslationStore>,
    language: Preference<LanguageCode>,
    theme: Preference<Theme>,
    view_mode: Preference<ViewMode>,
    events: Broadcaster,
    external_attempted: Rc<Cell<bool>>,
}

impl DesignSystem {
    /// Context with the bundled translation table installed.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self::with_table(storage, bundled_table())
    }

    /// Context with a caller-supplied base table (tests, embedders).
    pub fn with_table(storage: Rc<dyn KeyValueStore>, table: TranslationTable) -> Self {
        let events = Broadcaster::new();
        let translations = Rc::new(TranslationStore::new(
            LanguageCode::new(DEFAULT_LANGUAGE),
            events.clone(),
        ));
        translations.install(table);

        let language = Preference::load(
            storage.clone(),
            events.clone(),
            LanguageCode::new(DEFAULT_LANGUAGE),
        );
        let theme = Preference::load(storage.clone(), events.clone(), Theme::Light);
        let view_mode = Preference::load(storage, events.clone(), ViewMode::Text);

        Self {
            translations,
            language,
            theme,
            view_mode,
            events,
            external_attempted: Rc::new(Cell::new(false)),
        }
    }

    pub fn events(&self) -> &Broadcaster {
        &self.events
    }

    pub fn translations(&self) -> &TranslationStore {
        &self.translations
    }

    pub fn language(&self) -> LanguageCode {
        self.language.get()
    }

    pub fn set_language(&self, language: LanguageCode) {
        self.language.set(language);
    }

    pub fn language_preference(&self) -> &Preference<LanguageCode> {
        &self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn theme_preference(&self) -> &Preference<Theme> {
        &self.theme
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.get()
    }

    pub fn set_view_mode(&self, view_mode: ViewMode) {
        self.view_mode.set(view_mode);
    }

    pub fn view_mode_preference(&self) -> &Preference<ViewMode> {
        &self.view_mode
    }

    /// Resolve `key` against the current language.
    pub fn resolve(&self, key: &str) -> String {
        self.translations.resolve(key, &self.language.get())
    }

    /// Claim the single external-load attempt for this session. Returns
    /// `true` exactly once.
    pub fn claim_external_attempt(&self) -> bool {
        if self.external_attempted.get() {
            return false;
        }
        self.external_attempted.set(true);
        true
    }
}
