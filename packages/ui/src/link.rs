use dioxus::prelude::*;

#[component]
pub fn DsLink(
    href: String,
    #[props(default = false)] external: bool,
    children: Element,
) -> Element {
    rsx! {
        a {
            class: "ds_link",
            href,
            target: if external { "_blank" },
            rel: if external { "noopener noreferrer" },
            {children}
        }
    }
}
