//! View model types describing the affordances a host should mount.
//!
//! View models are computed from the session by [`crate::app::Session::view`]
//! and contain no behavior, only display-ready data.

use serde::Serialize;

/// Everything the host needs to lay out the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum View {
    /// One draggable button per registered file.
    SourceList {
        /// Per-file affordances in registry order.
        items: Vec<ItemView>,
    },
    /// A single draggable "N file(s)" button carrying every file.
    SourceCompact {
        /// The compact affordance.
        affordance: Affordance,
    },
    /// A drop zone.
    Target {
        /// The drop zone affordance.
        affordance: Affordance,
    },
}

/// Display information for one file in the list layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Registry index; drag requests from this button carry it.
    pub index: usize,
    /// Path relative to the working directory, or absolute.
    pub label: String,
    /// Guessed content type.
    pub content_type: String,
    /// Specific freedesktop icon name, e.g. `text-plain`.
    pub icon_name: String,
    /// Generic icon to use when the theme lacks `icon_name`.
    pub fallback_icon_name: String,
}

/// A labelled button with its CSS classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affordance {
    /// Text shown inside the button.
    pub label: String,
    /// CSS classes to apply, in order.
    pub css_classes: Vec<String>,
}
