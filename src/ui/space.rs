use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Row,
    Vertical,
}

/// Flex container spacing its children `size` steps apart.
#[component]
pub fn Space(
    #[props(default)] direction: Direction,
    #[props(default = 2)] size: u8,
    #[props(default, into)] class: String,
    #[props(default, into)] style: String,
    children: Element,
) -> Element {
    let direction_class = match direction {
        Direction::Row => "space-row",
        Direction::Vertical => "space-col",
    };
    rsx! {
        div {
            class: "space {direction_class} space-gap-{size} {class}",
            style: "{style}",
            {children}
        }
    }
}
