use dioxus::prelude::*;
use lumen::{DsIcon, DsText, DsTitle, IconName, ViewMode};

#[component]
pub fn Home() -> Element {
    let view_mode = lumen::use_view_mode()();

    rsx! {
        section { class: "hero",
            DsTitle { text_key: "home.title", level: 1 }
            p { DsText { text_key: "home.subtitle" } }
            p { class: "hint", DsText { text_key: "home.tip" } }
        }

        // The view-mode preference decides whether content areas lead with
        // imagery or stay text-only.
        section { class: "showcase",
            if view_mode == ViewMode::Image {
                div { class: "showcase_figure",
                    DsIcon { name: IconName::Image, size: 48 }
                }
            } else {
                p { DsText { text_key: "home.subtitle" } }
            }
        }
    }
}
