//! Slide-over side panel.
//!
//! Two layers share the `visible` flag: a fading backdrop and the sliding
//! panel itself. Both stay mounted until their leave transition finishes.
//! Clicking the region around the panel dismisses it; clicks inside the
//! panel box stop there.

use dioxus::{logger::tracing::trace, prelude::*};

use crate::{
    layout::{Align, FooterKind, Intent, Interaction, PanelLayout, resolve},
    transition::{TransitionClasses, TransitionTiming},
    ui::{
        button::{Button, ButtonVariant},
        icon::{Icon, IconKind, IconSize},
        space::{Direction, Space},
        transition::{Transition, use_transition},
        typography::{Text, Title},
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct SidePanelProps {
    pub visible: bool,
    pub title: Option<String>,
    pub description: Option<String>,
    #[props(default = VNode::empty())]
    pub children: Element,
    #[props(default)]
    pub wide: bool,
    #[props(default)]
    pub loading: bool,
    #[props(default)]
    pub align: Align,
    #[props(default)]
    pub align_footer: Align,
    #[props(default)]
    pub hide_footer: bool,
    /// Replaces the confirm/cancel buttons. Ignored when `hide_footer` is set.
    pub custom_footer: Option<Element>,
    /// Fired by the cancel button, the close button and backdrop clicks.
    pub on_cancel: Option<EventHandler<()>>,
    pub on_confirm: Option<EventHandler<()>>,
    #[props(default = "Cancel".to_string(), into)]
    pub on_cancel_text: String,
    #[props(default = "Confirm".to_string(), into)]
    pub on_confirm_text: String,
    /// Extra class for the innermost panel box.
    #[props(default, into)]
    pub class: String,
}

#[component]
pub fn SidePanel(props: SidePanelProps) -> Element {
    let layout = PanelLayout::new(
        props.align,
        props.align_footer,
        props.wide,
        props.hide_footer,
        props.custom_footer.is_some(),
        props.title.as_deref(),
        props.description.as_deref(),
    );

    let loading = props.loading;
    let on_cancel = props.on_cancel;
    let on_confirm = props.on_confirm;
    let dispatch = move |interaction: Interaction| {
        let Some(intent) = resolve(interaction, loading) else {
            return;
        };
        trace!("side panel {interaction:?} -> {intent:?}");
        let handler = match intent {
            Intent::Cancel => on_cancel,
            Intent::Confirm => on_confirm,
        };
        if let Some(handler) = handler {
            handler.call(());
        }
    };

    let footer_class = layout.footer.class_string();
    let footer_justify = layout.footer_justify;
    let footer = match layout.footer {
        FooterKind::Hidden => None,
        FooterKind::Custom => Some(rsx! {
            div { class: "{footer_class}", {props.custom_footer.clone()} }
        }),
        FooterKind::Default => Some(rsx! {
            div { class: "{footer_class}",
                Space { style: "width: 100%; justify-content: {footer_justify};",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: loading,
                        onclick: move |_| dispatch(Interaction::CancelButton),
                        "{props.on_cancel_text}"
                    }
                    Button {
                        loading,
                        onclick: move |_| dispatch(Interaction::ConfirmButton),
                        "{props.on_confirm_text}"
                    }
                }
            }
        }),
    };

    let title = props.title.clone().filter(|_| layout.show_title);
    let description = props.description.clone().filter(|_| layout.show_description);
    let orientation_class = layout.orientation_class;
    let width_class = layout.width_class;
    let panel_class = PanelLayout::panel_class(&props.class);

    let slide = use_transition(props.visible, TransitionTiming::SLIDE)();
    let slide_class = slide.class(&TransitionClasses::slide(layout.offscreen_class()));

    rsx! {
        Transition {
            show: props.visible,
            classes: TransitionClasses::fade(),
            timing: TransitionTiming::FADE,
            div { class: "panel-overlay-container",
                div { class: "panel-overlay" }
            }
        }
        if slide.is_mounted() {
            div {
                class: "panel-fixed",
                onclick: move |_| dispatch(Interaction::Backdrop),
                div { class: "panel-absolute",
                    section { class: "panel-container {orientation_class}",
                        div { class: "{slide_class}",
                            div { class: "{width_class}",
                                div {
                                    class: "{panel_class}",
                                    onclick: move |e: Event<MouseData>| {
                                        e.stop_propagation();
                                        dispatch(Interaction::PanelBody);
                                    },
                                    Space {
                                        direction: Direction::Vertical,
                                        size: 6,
                                        style: "min-height: 0; flex: 1 1 0%; overflow-y: scroll;",
                                        header { class: "panel-header",
                                            Space {
                                                size: 3,
                                                style: "align-items: center; justify-content: space-between;",
                                                if let Some(title) = title {
                                                    Title { class: "m-0", level: 4, "{title}" }
                                                }
                                                div { class: "panel-close-container",
                                                    Button {
                                                        aria_label: "Close panel".to_string(),
                                                        variant: ButtonVariant::Text,
                                                        shadow: false,
                                                        icon: rsx! {
                                                            Icon { kind: IconKind::X, size: IconSize::XLarge, stroke_width: 2 }
                                                        },
                                                        onclick: move |_| dispatch(Interaction::CloseButton),
                                                    }
                                                }
                                            }
                                            div {
                                                if let Some(description) = description {
                                                    Text { "{description}" }
                                                }
                                            }
                                        }
                                        div { class: "panel-content", {props.children} }
                                    }
                                    {footer}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
