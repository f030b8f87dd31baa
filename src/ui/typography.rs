use dioxus::prelude::*;

/// Heading; `level` outside 1..=6 renders as `h6`.
#[component]
pub fn Title(#[props(default = 1)] level: u8, #[props(default, into)] class: String, children: Element) -> Element {
    let class = format!("title title-{level} {class}");
    match level {
        1 => rsx! { h1 { class, {children} } },
        2 => rsx! { h2 { class, {children} } },
        3 => rsx! { h3 { class, {children} } },
        4 => rsx! { h4 { class, {children} } },
        5 => rsx! { h5 { class, {children} } },
        _ => rsx! { h6 { class, {children} } },
    }
}

#[component]
pub fn Text(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        span { class: "text {class}", {children} }
    }
}
