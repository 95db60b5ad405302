use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

/// Injects the design-system stylesheets. Mount once near the app root.
#[component]
pub fn LumenTheme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: COMPONENTS_CSS }
    }
}
