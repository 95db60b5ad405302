use dioxus::prelude::*;

use crate::icon::{DsIcon, IconName};
use crate::provider::{use_design_system, use_language, use_text};

/// Dropdown listing every registered language in priority order. Picking
/// one sets the shared language preference; every text-bearing component
/// follows through the broadcast.
#[component]
pub fn LanguageMenu() -> Element {
    let ds = use_design_system();
    let current = use_language()();
    let label = use_text("label.language");

    let mut open = use_signal(|| false);

    // Reading through use_text above ties this component to the catalog
    // epoch, so the list refreshes when an external table lands.
    let languages = ds.translations().languages();

    rsx! {
        div { class: "language_menu",
            button {
                class: "ds_btn ghost",
                "aria-label": "{label}",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                DsIcon { name: IconName::Globe }
                {current.display_name()}
            }

            if open() {
                div { class: "dropdown",
                    for language in languages.iter() {
                        button {
                            key: "{language.as_str()}",
                            class: if language.normalized() == current.normalized() { "dropdown_item active" } else { "dropdown_item" },
                            onclick: {
                                let ds = ds.clone();
                                let language = language.clone();
                                move |_| {
                                    ds.set_language(language.clone());
                                    open.set(false);
                                }
                            },
                            {language.display_name()}
                        }
                    }
                }
            }
        }
    }
}
