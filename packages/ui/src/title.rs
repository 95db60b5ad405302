use dioxus::prelude::*;

use crate::provider::use_text;

/// A translated heading. `level` clamps to the h1–h6 range.
#[component]
pub fn DsTitle(text_key: String, #[props(default = 2)] level: u8) -> Element {
    let value = use_text(&text_key);
    match level {
        0 | 1 => rsx! {
            h1 { class: "ds_title", {value} }
        },
        2 => rsx! {
            h2 { class: "ds_title", {value} }
        },
        3 => rsx! {
            h3 { class: "ds_title", {value} }
        },
        4 => rsx! {
            h4 { class: "ds_title", {value} }
        },
        5 => rsx! {
            h5 { class: "ds_title", {value} }
        },
        _ => rsx! {
            h6 { class: "ds_title", {value} }
        },
    }
}
