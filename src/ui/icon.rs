use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconKind {
    #[default]
    X,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl IconSize {
    fn px(self) -> u32 {
        match self {
            IconSize::Small => 14,
            IconSize::Medium => 18,
            IconSize::Large => 20,
            IconSize::XLarge => 24,
        }
    }
}

#[component]
pub fn Icon(
    #[props(default)] kind: IconKind,
    #[props(default)] size: IconSize,
    #[props(default = 2)] stroke_width: u8,
) -> Element {
    let px = size.px();
    rsx! {
        svg {
            class: "icon",
            width: "{px}",
            height: "{px}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {
                match kind {
                    IconKind::X => rsx! {
                        line { x1: "18", y1: "6", x2: "6", y2: "18" }
                        line { x1: "6", y1: "6", x2: "18", y2: "18" }
                    },
                }
            }
        }
    }
}
