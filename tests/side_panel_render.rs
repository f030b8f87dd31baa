use dioxus::prelude::*;
use side_panel::{Align, SidePanel};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn hidden_panel_renders_nothing() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: false, title: "Hidden".to_string(), "body" }
        }
    }
    let html = render(app);
    assert!(!html.contains("panel-overlay"));
    assert!(!html.contains("panel-fixed"));
    assert!(!html.contains("Hidden"));
}

#[test]
fn visible_panel_renders_both_layers() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, p { "panel body" } }
        }
    }
    let html = render(app);
    assert!(html.contains("panel-overlay"));
    assert!(html.contains("panel-fixed"));
    assert!(html.contains("panel-right"));
    assert!(html.contains("panel-medium"));
    assert!(html.contains("panel body"));
}

#[test]
fn title_and_labels_come_from_configuration() {
    fn app() -> Element {
        rsx! {
            SidePanel {
                visible: true,
                title: "Edit item".to_string(),
                on_cancel_text: "Discard",
                on_confirm_text: "Save",
            }
        }
    }
    let html = render(app);
    assert!(html.contains("<h4"));
    assert!(html.contains("Edit item"));
    assert!(html.contains("Discard"));
    assert!(html.contains("Save"));
    assert!(!html.contains("Cancel"));
    assert!(!html.contains("Confirm"));
}

#[test]
fn missing_title_and_description_are_omitted() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, title: String::new() }
        }
    }
    let html = render(app);
    assert!(!html.contains("<h4"));
    assert!(!html.contains("class=\"text"));
    assert!(html.contains("aria-label=\"Close panel\""));
}

#[test]
fn description_renders_when_set() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, description: "Rename the item".to_string() }
        }
    }
    let html = render(app);
    assert!(html.contains("Rename the item"));
    assert!(html.contains("class=\"text"));
}

#[test]
fn default_footer_has_two_buttons_with_default_labels() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true }
        }
    }
    let html = render(app);
    // close button plus cancel and confirm
    assert_eq!(html.matches("<button").count(), 3);
    assert!(html.contains("Cancel"));
    assert!(html.contains("Confirm"));
    assert!(html.contains("footer-container footer-default"));
    assert!(html.contains("justify-content: flex-end"));
}

#[test]
fn footer_buttons_align_left() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, align_footer: Align::Left }
        }
    }
    assert!(render(app).contains("justify-content: flex-start"));
}

#[test]
fn custom_footer_replaces_default_buttons() {
    fn app() -> Element {
        rsx! {
            SidePanel {
                visible: true,
                custom_footer: rsx! { span { class: "my-footer", "Custom actions" } },
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Custom actions"));
    assert!(html.contains("class=\"footer-container\""));
    assert!(!html.contains("footer-default"));
    assert!(!html.contains("Confirm"));
    assert_eq!(html.matches("<button").count(), 1);
}

#[test]
fn hide_footer_wins_over_custom_footer() {
    fn app() -> Element {
        rsx! {
            SidePanel {
                visible: true,
                hide_footer: true,
                custom_footer: rsx! { span { "Custom actions" } },
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("Custom actions"));
    assert!(!html.contains("footer-container"));
    assert!(!html.contains("Confirm"));
}

#[test]
fn wide_panel_uses_wide_class() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, wide: true }
        }
    }
    let html = render(app);
    assert!(html.contains("panel-wide"));
    assert!(!html.contains("panel-medium"));
}

#[test]
fn left_aligned_panel_anchors_left() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, align: Align::Left }
        }
    }
    let html = render(app);
    assert!(html.contains("panel-container panel-left"));
    assert!(!html.contains("panel-right"));
}

#[test]
fn extra_class_lands_on_panel_box() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, class: "audit-log" }
        }
    }
    assert!(render(app).contains("class=\"panel audit-log\""));
}

#[test]
fn loading_disables_cancel_and_marks_confirm_busy() {
    fn app() -> Element {
        rsx! {
            SidePanel { visible: true, loading: true }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("disabled").count(), 1);
    assert!(html.contains("button-spinner"));
    assert!(html.contains("aria-busy"));
}
