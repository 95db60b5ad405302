use dioxus::prelude::*;
use lumen::{
    ButtonVariant, DsButton, DsGrid, DsIcon, DsLink, DsText, DsTitle, IconName, PriceTag,
};

/// One card per component family, so every piece renders against the live
/// preference state.
#[component]
pub fn Gallery() -> Element {
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        DsTitle { text_key: "gallery.title", level: 1 }

        DsGrid { columns: 2,
            div { class: "panel",
                h3 { "Buttons" }
                div { class: "cta_row",
                    DsButton {
                        onclick: move |_| clicks.with_mut(|count| *count += 1),
                        DsText { text_key: "action.download" }
                    }
                    DsButton {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| clicks.with_mut(|count| *count += 1),
                        DsIcon { name: IconName::Download }
                        DsText { text_key: "action.download" }
                    }
                    DsButton {
                        variant: ButtonVariant::Ghost,
                        disabled: true,
                        onclick: move |_| {},
                        DsText { text_key: "action.download" }
                    }
                }
                p { class: "hint", "{clicks} clicks" }
            }

            div { class: "panel",
                h3 { "Icons" }
                div { class: "cta_row",
                    DsIcon { name: IconName::ArrowRight, size: 24 }
                    DsIcon { name: IconName::Sun, size: 24 }
                    DsIcon { name: IconName::Moon, size: 24 }
                    DsIcon { name: IconName::Globe, size: 24 }
                    DsIcon { name: IconName::Image, size: 24 }
                    DsIcon { name: IconName::TextLines, size: 24 }
                }
            }

            div { class: "panel",
                h3 { "Links" }
                DsLink { href: "/", DsText { text_key: "nav.home" } }
            }

            div { class: "panel",
                h3 { "Pricing" }
                PriceTag {}
                " · "
                PriceTag { country: "dk".to_string() }
            }
        }
    }
}
