// Copyright © 2025 Nipun Kumar

use dioxus::{
    logger::tracing::{info, warn},
    prelude::*,
};

use crate::{
    app_settings::GallerySettings,
    layout::Align,
    storage::{Storage, open_storage},
    ui::{
        button::{Button, ButtonVariant},
        side_panel::SidePanel,
        space::Space,
    },
};

async fn load_settings() -> GallerySettings {
    let storage = match open_storage() {
        Ok(s) => s,
        Err(e) => {
            warn!("Gallery settings unavailable: {e:?}");
            return GallerySettings::default();
        }
    };
    match storage.load_settings().await {
        Ok(s) => s.unwrap_or_default(),
        Err(e) => {
            warn!("Could not load gallery settings: {e:?}");
            GallerySettings::default()
        }
    }
}

async fn save_settings(settings: GallerySettings) {
    let storage = match open_storage() {
        Ok(s) => s,
        Err(e) => {
            warn!("Gallery settings unavailable: {e:?}");
            return;
        }
    };
    if let Err(e) = storage.save_settings(&settings).await {
        warn!("Could not save gallery settings: {e:?}");
    }
}

/// Demo page with a control for every panel option.
#[component]
pub fn Gallery() -> Element {
    let loaded = use_resource(load_settings);
    let Some(initial) = loaded() else {
        return rsx! { "Loading..." };
    };
    rsx! {
        GalleryControls { initial }
    }
}

#[component]
fn GalleryControls(initial: GallerySettings) -> Element {
    let mut settings = use_signal(|| initial);
    let mut visible = use_signal(|| false);

    let mut update = move |f: Box<dyn FnOnce(&mut GallerySettings)>| {
        settings.with_mut(f);
        let snapshot = settings.cloned();
        spawn(save_settings(snapshot));
    };

    let s = settings();
    let custom_footer = s.custom_footer.then(|| {
        rsx! {
            Space { style: "width: 100%; justify-content: space-between;",
                span { "Custom footer" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| visible.set(false),
                    "Done"
                }
            }
        }
    });

    rsx! {
        div { style: "padding: 1rem; display: flex; flex-direction: column; gap: 0.75rem; max-width: 28rem;",
            h3 { style: "margin: 0;", "Side panel" }
            label {
                "Title "
                input {
                    value: "{s.title}",
                    oninput: move |e: Event<FormData>| update(Box::new(move |s| s.title = e.value())),
                }
            }
            label {
                "Description "
                input {
                    value: "{s.description}",
                    oninput: move |e: Event<FormData>| update(Box::new(move |s| s.description = e.value())),
                }
            }
            label {
                "Cancel label "
                input {
                    value: "{s.cancel_text}",
                    oninput: move |e: Event<FormData>| update(Box::new(move |s| s.cancel_text = e.value())),
                }
            }
            label {
                "Confirm label "
                input {
                    value: "{s.confirm_text}",
                    oninput: move |e: Event<FormData>| update(Box::new(move |s| s.confirm_text = e.value())),
                }
            }
            Toggle {
                label: "Wide",
                checked: s.wide,
                onchange: move |v| update(Box::new(move |s| s.wide = v)),
            }
            Toggle {
                label: "Loading",
                checked: s.loading,
                onchange: move |v| update(Box::new(move |s| s.loading = v)),
            }
            Toggle {
                label: "Slide from left",
                checked: s.align.is_left(),
                onchange: move |v| update(Box::new(move |s| s.align = if v { Align::Left } else { Align::Right })),
            }
            Toggle {
                label: "Footer buttons on the left",
                checked: s.align_footer.is_left(),
                onchange: move |v| update(Box::new(move |s| s.align_footer = if v { Align::Left } else { Align::Right })),
            }
            Toggle {
                label: "Hide footer",
                checked: s.hide_footer,
                onchange: move |v| update(Box::new(move |s| s.hide_footer = v)),
            }
            Toggle {
                label: "Custom footer",
                checked: s.custom_footer,
                onchange: move |v| update(Box::new(move |s| s.custom_footer = v)),
            }
            Button { onclick: move |_| visible.set(true), "Open panel" }
        }

        SidePanel {
            visible: visible(),
            title: s.title.clone(),
            description: s.description.clone(),
            wide: s.wide,
            loading: s.loading,
            align: s.align,
            align_footer: s.align_footer,
            hide_footer: s.hide_footer,
            custom_footer,
            on_cancel_text: GallerySettings::label(&s.cancel_text, "Cancel"),
            on_confirm_text: GallerySettings::label(&s.confirm_text, "Confirm"),
            on_cancel: move |_| {
                info!("side panel cancelled");
                visible.set(false);
            },
            on_confirm: move |_| {
                info!("side panel confirmed");
                visible.set(false);
            },
            p { "Panel content scrolls when it is taller than the viewport." }
            for i in 1..=30 {
                p { "Line {i}" }
            }
        }
    }
}

#[component]
fn Toggle(#[props(into)] label: String, checked: bool, onchange: Callback<bool, ()>) -> Element {
    rsx! {
        label {
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e: Event<FormData>| onchange(e.checked()),
            }
            " {label}"
        }
    }
}
