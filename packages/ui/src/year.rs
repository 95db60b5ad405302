use chrono::Datelike;
use dioxus::prelude::*;

/// The current year, for copyright lines.
#[component]
pub fn Year() -> Element {
    let year = chrono::Local::now().year();
    rsx! {
        span { "{year}" }
    }
}
