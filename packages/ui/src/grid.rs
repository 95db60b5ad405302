use dioxus::prelude::*;

/// Equal-column CSS grid container.
#[component]
pub fn DsGrid(#[props(default = 3)] columns: u8, children: Element) -> Element {
    let columns = columns.max(1);
    rsx! {
        div {
            class: "ds_grid",
            style: "grid-template-columns: repeat({columns}, minmax(0, 1fr));",
            {children}
        }
    }
}
