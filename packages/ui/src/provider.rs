use dioxus::prelude::*;
use serde::Deserialize;
use std::rc::Rc;

use crate::context::DesignSystem;
use crate::events::{Broadcaster, Channel, Event, Subscription};
use crate::language::{preferred_language, LanguageCode};
use crate::loader::{load_external_translations, HttpFetcher, DEFAULT_TRANSLATION_SOURCES};
use crate::prefs::{Theme, ViewMode};
use crate::storage::{self, MemoryStore};

/// Reactive mirrors of the broadcast channels. Components read these
/// through the hooks below; the provider keeps them in sync with the
/// broadcaster so every change pushes a re-render.
#[derive(Clone, Copy)]
struct DsSignals {
    language: Signal<LanguageCode>,
    theme: Signal<Theme>,
    view_mode: Signal<ViewMode>,
    /// Bumped on every table swap so key lookups re-run.
    catalog_epoch: Signal<u32>,
}

const JS_SYSTEM_PROBE: &str = r#"
(function(){
  var probe = { locale: "", dark: false };
  try { probe.locale = navigator.language || ""; } catch (e) {}
  try {
    probe.dark = !!(window.matchMedia
      && window.matchMedia("(prefers-color-scheme: dark)").matches);
  } catch (e) {}
  return JSON.stringify(probe);
})()
"#;

#[derive(Deserialize)]
struct SystemProbe {
    locale: String,
    dark: bool,
}

/// Owns the [`DesignSystem`] for the subtree and provides it via context.
///
/// After mount it probes the runtime for a locale and color-scheme hint
/// (used only when nothing is persisted, and never persisted itself) and
/// runs the one-shot external translation probe.
#[component]
pub fn DsProvider(children: Element) -> Element {
    let ds = use_hook(|| DesignSystem::new(storage::default_store()));
    use_context_provider(|| ds.clone());

    let language = use_signal({
        let ds = ds.clone();
        move || ds.language()
    });
    let theme = use_signal({
        let ds = ds.clone();
        move || ds.theme()
    });
    let view_mode = use_signal({
        let ds = ds.clone();
        move || ds.view_mode()
    });
    let catalog_epoch = use_signal(|| 0u32);
    use_context_provider(|| DsSignals {
        language,
        theme,
        view_mode,
        catalog_epoch,
    });

    let subscriptions: Rc<(Broadcaster, Vec<Subscription>)> = use_hook(|| {
        let events = ds.events().clone();
        let handles = mirror_into_signals(&events, language, theme, view_mode, catalog_epoch);
        Rc::new((events, handles))
    });
    use_drop(move || {
        let (events, handles) = subscriptions.as_ref();
        for handle in handles {
            events.unsubscribe(handle);
        }
    });

    {
        let ds = ds.clone();
        use_effect(move || {
            let ds = ds.clone();
            spawn(async move {
                bootstrap(ds, language, theme).await;
            });
        });
    }

    rsx! {
        {children}
    }
}

fn mirror_into_signals(
    events: &Broadcaster,
    language: Signal<LanguageCode>,
    theme: Signal<Theme>,
    view_mode: Signal<ViewMode>,
    catalog_epoch: Signal<u32>,
) -> Vec<Subscription> {
    let mut handles = Vec::new();

    {
        let mut language = language;
        handles.push(events.subscribe(Channel::LanguageChanged, move |event| {
            if let Event::LanguageChanged(next) = event {
                language.set(next.clone());
            }
        }));
    }
    {
        let mut theme = theme;
        handles.push(events.subscribe(Channel::ThemeChanged, move |event| {
            if let Event::ThemeChanged(next) = event {
                theme.set(*next);
            }
        }));
    }
    {
        let mut view_mode = view_mode;
        handles.push(events.subscribe(Channel::ViewModeChanged, move |event| {
            if let Event::ViewModeChanged(next) = event {
                view_mode.set(*next);
            }
        }));
    }
    for channel in [Channel::TranslationsLoaded, Channel::TranslationsReady] {
        let mut catalog_epoch = catalog_epoch;
        handles.push(events.subscribe(channel, move |_| {
            catalog_epoch.with_mut(|epoch| *epoch = epoch.wrapping_add(1));
        }));
    }

    handles
}

async fn bootstrap(ds: DesignSystem, mut language: Signal<LanguageCode>, mut theme: Signal<Theme>) {
    if let Ok(value) = document::eval(JS_SYSTEM_PROBE).await {
        if let Some(raw) = value.as_str() {
            match serde_json::from_str::<SystemProbe>(raw) {
                Ok(probe) => {
                    if !ds.language_preference().is_persisted() {
                        if let Some(code) = preferred_language(&probe.locale) {
                            ds.language_preference().prime(code.clone());
                            language.set(code);
                        }
                    }
                    if !ds.theme_preference().is_persisted() && probe.dark {
                        ds.theme_preference().prime(Theme::Dark);
                        theme.set(Theme::Dark);
                    }
                }
                Err(err) => {
                    tracing::debug!(error = %err, "system probe returned malformed JSON");
                }
            }
        }
    }

    let fetcher = HttpFetcher::new();
    load_external_translations(&ds, &fetcher, &DEFAULT_TRANSLATION_SOURCES).await;
}

/// The design system for the current subtree.
pub fn use_design_system() -> DesignSystem {
    if let Some(ds) = try_use_context::<DesignSystem>() {
        return ds;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    tracing::warn!("missing DsProvider context; using a detached design system");
    use_hook(|| DesignSystem::new(Rc::new(MemoryStore::new())))
}

fn use_ds_signals() -> DsSignals {
    if let Some(signals) = try_use_context::<DsSignals>() {
        return signals;
    }

    tracing::warn!("missing DsProvider context; preference signals are detached");
    let ds = use_design_system();
    DsSignals {
        language: use_signal({
            let ds = ds.clone();
            move || ds.language()
        }),
        theme: use_signal({
            let ds = ds.clone();
            move || ds.theme()
        }),
        view_mode: use_signal(move || ds.view_mode()),
        catalog_epoch: use_signal(|| 0),
    }
}

pub fn use_language() -> Signal<LanguageCode> {
    use_ds_signals().language
}

pub fn use_theme() -> Signal<Theme> {
    use_ds_signals().theme
}

pub fn use_view_mode() -> Signal<ViewMode> {
    use_ds_signals().view_mode
}

/// Resolve a translation key reactively: the calling component re-renders
/// on language changes and table swaps.
pub fn use_text(key: &str) -> String {
    let signals = use_ds_signals();
    let ds = use_design_system();
    let _epoch = (signals.catalog_epoch)();
    let language = (signals.language)();
    ds.translations().resolve(key, &language)
}
