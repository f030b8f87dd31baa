//! Presentational components.
//!
//! `SidePanel` is the public surface; the rest are the small building blocks
//! it is composed from, exported so callers can build matching footers.

pub mod button;     // Button with outline/text variants and loading spinner
pub(crate) mod gallery; // Interactive demo page for the panel
pub mod icon;       // Inline SVG icons
pub mod side_panel;
pub mod space;      // Flex spacing container
pub mod transition; // Enter/leave transition wrapper and hook
pub mod typography; // Title and Text
