use dioxus::prelude::*;

use crate::pricing::price_label;
use crate::provider::use_language;

#[component]
pub fn PriceTag(#[props(default)] country: Option<String>) -> Element {
    let language = use_language()();
    let label = price_label(&language, country.as_deref());
    rsx! {
        span { class: "ds_price", {label} }
    }
}
