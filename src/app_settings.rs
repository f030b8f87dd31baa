use serde::{Deserialize, Serialize};

use crate::layout::Align;

/// Panel options last used in the gallery.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GallerySettings {
    pub title: String,
    pub description: String,
    pub wide: bool,
    pub loading: bool,
    pub align: Align,
    pub align_footer: Align,
    pub hide_footer: bool,
    pub custom_footer: bool,
    pub cancel_text: String,
    pub confirm_text: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            title: "Edit item".to_string(),
            description: "Changes are saved when you confirm.".to_string(),
            wide: false,
            loading: false,
            align: Align::Right,
            align_footer: Align::Right,
            hide_footer: false,
            custom_footer: false,
            cancel_text: "Cancel".to_string(),
            confirm_text: "Confirm".to_string(),
        }
    }
}

impl GallerySettings {
    /// Label to pass for a button, falling back to the panel default when blank.
    pub fn label(text: &str, fallback: &str) -> String {
        let text = text.trim();
        if text.is_empty() { fallback.to_string() } else { text.to_string() }
    }
}
