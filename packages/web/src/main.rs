use dioxus::prelude::*;

use views::{Gallery, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteFrame)]
    #[route("/")]
    Home {},
    #[route("/gallery")]
    Gallery {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        lumen::LumenTheme {}
        lumen::DsProvider {
            Router::<Route> {}
        }
    }
}

/// Shared frame: themed page shell with the site nav and the three
/// preference controls in the top-right corner.
#[component]
fn SiteFrame() -> Element {
    let items = vec![
        lumen::NavItem::new("nav.home", "/"),
        lumen::NavItem::new("nav.work", "/gallery"),
    ];

    rsx! {
        lumen::PageLayout {
            lumen::NavBar { items,
                lumen::ViewToggle {}
                lumen::ThemeToggle {}
                lumen::LanguageMenu {}
            }
            div { class: "route_view", Outlet::<Route> {} }
            footer { class: "site_footer hint",
                "© "
                lumen::Year {}
                " Lumen"
            }
        }
    }
}
