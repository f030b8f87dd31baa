//! Derived layout values for the side panel.
//!
//! Everything the panel decides from its configuration lives here as plain
//! functions, so the component body only binds the results to markup.

use serde::{Deserialize, Serialize};

/// Edge of the viewport a panel is anchored to, also used for footer justification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Right,
}

impl Align {
    pub fn is_left(self) -> bool {
        self == Align::Left
    }

    /// `justify-content` value for a row aligned to this edge.
    pub fn justify(self) -> &'static str {
        match self {
            Align::Left => "flex-start",
            Align::Right => "flex-end",
        }
    }
}

/// Which footer the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterKind {
    Hidden,
    Custom,
    Default,
}

impl FooterKind {
    /// `hide_footer` always wins over a supplied custom footer.
    pub fn select(hide_footer: bool, has_custom: bool) -> Self {
        if hide_footer {
            FooterKind::Hidden
        } else if has_custom {
            FooterKind::Custom
        } else {
            FooterKind::Default
        }
    }

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            FooterKind::Hidden => &[],
            FooterKind::Custom => &["footer-container"],
            FooterKind::Default => &["footer-container", "footer-default"],
        }
    }

    pub fn class_string(self) -> String {
        self.classes().join(" ")
    }
}

/// Resolved layout for one render of the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub align: Align,
    pub orientation_class: &'static str,
    pub width_class: &'static str,
    pub footer: FooterKind,
    pub footer_justify: &'static str,
    pub show_title: bool,
    pub show_description: bool,
}

impl PanelLayout {
    pub fn new(
        align: Align,
        align_footer: Align,
        wide: bool,
        hide_footer: bool,
        has_custom_footer: bool,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            align,
            orientation_class: if align.is_left() { "panel-left" } else { "panel-right" },
            width_class: if wide { "panel-wide" } else { "panel-medium" },
            footer: FooterKind::select(hide_footer, has_custom_footer),
            footer_justify: align_footer.justify(),
            show_title: title.is_some_and(|t| !t.is_empty()),
            show_description: description.is_some_and(|d| !d.is_empty()),
        }
    }

    /// Off-screen translation the panel slides from and back to.
    pub fn offscreen_class(&self) -> &'static str {
        if self.align.is_left() {
            "-translate-x-full"
        } else {
            "translate-x-full"
        }
    }

    /// Class of the innermost panel box, with the caller's extra class appended.
    pub fn panel_class(extra: &str) -> String {
        let extra = extra.trim();
        if extra.is_empty() {
            "panel".to_string()
        } else {
            format!("panel {extra}")
        }
    }
}

/// A discrete user action on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    CancelButton,
    CloseButton,
    Backdrop,
    PanelBody,
    ConfirmButton,
}

/// What the caller is told about an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Cancel,
    Confirm,
}

/// Maps an interaction to the callback it should fire, if any.
///
/// The close button and the backdrop dismiss even while loading; only the
/// footer cancel button is disabled. Clicks inside the panel are swallowed.
pub fn resolve(interaction: Interaction, loading: bool) -> Option<Intent> {
    match interaction {
        Interaction::CloseButton | Interaction::Backdrop => Some(Intent::Cancel),
        Interaction::CancelButton if loading => None,
        Interaction::CancelButton => Some(Intent::Cancel),
        Interaction::ConfirmButton => Some(Intent::Confirm),
        Interaction::PanelBody => None,
    }
}
