use dioxus::prelude::*;

use crate::button::{ButtonVariant, DsButton};
use crate::icon::{DsIcon, IconName};
use crate::prefs::ViewMode;
use crate::provider::{use_design_system, use_text, use_view_mode};

/// Flips the shared view-mode preference between text and imagery. The
/// label follows both the current mode and the current language.
#[component]
pub fn ViewToggle() -> Element {
    let ds = use_design_system();
    let mode = use_view_mode()();

    let (icon, label_key) = match mode {
        ViewMode::Text => (IconName::Image, "view.show_image"),
        ViewMode::Image => (IconName::TextLines, "view.hide_image"),
    };
    let label = use_text(label_key);

    rsx! {
        DsButton {
            variant: ButtonVariant::Secondary,
            onclick: move |_| ds.set_view_mode(mode.toggled()),
            DsIcon { name: icon }
            {label}
        }
    }
}
