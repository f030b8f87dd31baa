use dioxus::prelude::*;

mod app_settings;
pub mod layout;
mod storage;
pub mod transition;
pub mod ui;

pub use layout::Align;
pub use ui::side_panel::{SidePanel, SidePanelProps};

use ui::gallery::Gallery;

/// Stylesheet for the panel and its building blocks.
pub const SIDE_PANEL_CSS: Asset = asset!("/assets/side_panel.css");

/// Demo application: the gallery page with the panel stylesheet loaded.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SIDE_PANEL_CSS }
        Gallery {}
    }
}
