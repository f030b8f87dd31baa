use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Text,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Outline => "button-outline",
            ButtonVariant::Text => "button-text",
        }
    }
}

/// Clickable button. A disabled button never fires `onclick`; a loading one
/// shows a spinner in front of its label.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default = true)] shadow: bool,
    icon: Option<Element>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    let variant_class = variant.class();
    let shadow_class = if shadow { "button-shadow" } else { "" };
    let busy = if loading { Some(true) } else { None };
    let inert = disabled;
    let disabled = if disabled { Some(true) } else { None };
    rsx! {
        button {
            class: "button {variant_class} {shadow_class}",
            r#type: "button",
            disabled,
            aria_label,
            aria_busy: busy,
            onclick: move |e| {
                if inert {
                    return;
                }
                if let Some(onclick) = onclick {
                    onclick.call(e);
                }
            },
            if loading {
                span { class: "button-spinner" }
            }
            {icon}
            {children}
        }
    }
}
