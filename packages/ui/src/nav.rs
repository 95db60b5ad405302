use dioxus::prelude::*;

use crate::provider::use_text;

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub text_key: String,
    pub href: String,
}

impl NavItem {
    pub fn new(text_key: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text_key: text_key.into(),
            href: href.into(),
        }
    }
}

/// Horizontal navigation row. `active` marks the current location by href;
/// trailing children land right-aligned (the usual spot for the language
/// menu and toggles).
#[component]
pub fn NavBar(
    items: Vec<NavItem>,
    #[props(default)] active: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        nav { class: "ds_nav",
            for item in items.iter() {
                NavLink {
                    key: "{item.href}",
                    item: item.clone(),
                    active: active.as_deref() == Some(item.href.as_str()),
                }
            }
            span { class: "nav_spacer" }
            {children}
        }
    }
}

#[component]
fn NavLink(item: NavItem, active: bool) -> Element {
    let label = use_text(&item.text_key);
    rsx! {
        a {
            class: if active { "nav_link active" } else { "nav_link" },
            href: "{item.href}",
            {label}
        }
    }
}
