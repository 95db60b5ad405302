use dioxus::prelude::*;

use crate::button::{ButtonVariant, DsButton};
use crate::icon::{DsIcon, IconName};
use crate::prefs::Theme;
use crate::provider::{use_design_system, use_text, use_theme};

/// Switches between the light and dark theme. Shows the theme it would
/// switch *to*, matching platform convention.
#[component]
pub fn ThemeToggle() -> Element {
    let ds = use_design_system();
    let theme = use_theme()();

    let (icon, label_key) = match theme {
        Theme::Light => (IconName::Moon, "theme.dark"),
        Theme::Dark => (IconName::Sun, "theme.light"),
    };
    let label = use_text(label_key);

    rsx! {
        DsButton {
            variant: ButtonVariant::Ghost,
            onclick: move |_| ds.set_theme(theme.toggled()),
            DsIcon { name: icon }
            {label}
        }
    }
}
