use dioxus::prelude::*;

/// The built-in icon set. Drawn inline as 24×24 stroke paths so they
/// inherit `currentColor` from the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    ArrowRight,
    Sun,
    Moon,
    Globe,
    Image,
    TextLines,
    Download,
}

impl IconName {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::ArrowRight => &["M4 12h16", "M13 5l7 7-7 7"],
            IconName::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 0 0 0-8",
                "M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4",
            ],
            IconName::Moon => &["M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8"],
            IconName::Globe => &[
                "M12 3a9 9 0 1 0 0 18a9 9 0 0 0 0-18",
                "M3 12h18",
                "M12 3a13.5 13.5 0 0 1 0 18a13.5 13.5 0 0 1 0-18",
            ],
            IconName::Image => &[
                "M4 5h16v14H4z",
                "M4 15l4-4 4 4 3-3 5 5",
                "M9 9a1 1 0 1 0 0 2a1 1 0 0 0 0-2",
            ],
            IconName::TextLines => &["M4 6h16", "M4 12h16", "M4 18h10"],
            IconName::Download => &["M12 3v12", "M7 10l5 5 5-5", "M4 21h16"],
        }
    }
}

#[component]
pub fn DsIcon(name: IconName, #[props(default = 16)] size: u32) -> Element {
    rsx! {
        svg {
            class: "ds_icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in name.paths() {
                path { d: "{d}" }
            }
        }
    }
}
