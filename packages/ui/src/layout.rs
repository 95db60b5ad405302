use dioxus::prelude::*;

use crate::provider::use_theme;

/// Page shell: applies the active theme class on the root element and
/// centers content in a container. The theme class drives every token in
/// theme.css, so switching themes restyles the whole subtree at once.
#[component]
pub fn PageLayout(children: Element) -> Element {
    let theme = use_theme()();
    rsx! {
        div { class: "lumen_root {theme.class()}",
            div { class: "lumen_container", {children} }
        }
    }
}
