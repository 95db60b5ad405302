use dioxus::prelude::*;

use crate::provider::use_text;

/// A span of translated text, addressed by key. Untranslated keys render
/// as themselves so a gap in the table never blanks the UI.
#[component]
pub fn DsText(text_key: String, #[props(default)] class: String) -> Element {
    let value = use_text(&text_key);
    rsx! {
        span { class: "ds_text {class}", {value} }
    }
}
