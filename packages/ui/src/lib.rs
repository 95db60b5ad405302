//! This crate contains the Lumen design system: the shared UI components
//! and the language/theme/view-mode core they all read from.

mod language;
pub use language::{
    preferred_language, sort_language_codes, LanguageCode, DEFAULT_LANGUAGE,
    LANGUAGE_PRIORITY_ORDER,
};

mod events;
pub use events::{Broadcaster, Channel, Event, Subscription};

mod storage;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
pub use storage::{default_store, KeyValueStore, MemoryStore};

mod prefs;
pub use prefs::{Preference, PreferenceKind, Theme, ViewMode};

mod translations;
pub use translations::{Catalog, TranslationStore, TranslationTable};

mod context;
pub use context::DesignSystem;

mod loader;
pub use loader::{
    load_external_translations, HttpFetcher, TranslationFetcher, DEFAULT_TRANSLATION_SOURCES,
};

mod provider;
pub use provider::{
    use_design_system, use_language, use_text, use_theme, use_view_mode, DsProvider,
};

mod pricing;
pub use pricing::price_label;

mod theme;
pub use theme::LumenTheme;

mod button;
pub use button::{ButtonVariant, DsButton};

mod text;
pub use text::DsText;

mod icon;
pub use icon::{DsIcon, IconName};

mod link;
pub use link::DsLink;

mod title;
pub use title::DsTitle;

mod year;
pub use year::Year;

mod price;
pub use price::PriceTag;

mod view_toggle;
pub use view_toggle::ViewToggle;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod nav;
pub use nav::{NavBar, NavItem};

mod language_menu;
pub use language_menu::LanguageMenu;

mod grid;
pub use grid::DsGrid;

mod layout;
pub use layout::PageLayout;
