//! Stylesheet and CSS class names for the affordances.
//!
//! A built-in stylesheet is used unless the config file names a CSS file via
//! `style_file`. Hosts apply the stylesheet once and toggle classes as the view
//! model changes.

use crate::domain::{PhoenixError, Result};
use std::fs;
use std::path::Path;

/// Dashed, rounded border around the compact button and the drop zone.
pub const ROUNDED_BORDER_CLASS: &str = "rounded-border";

/// Applied to the drop zone while a compatible drag hovers over it.
pub const DROP_HOVER_CLASS: &str = "target-btn-drop-hover";

/// Caption of the drop zone.
pub const TARGET_CAPTION: &str = "Drag something here...";

const DEFAULT_CSS: &str = "\
.rounded-border {
   border: 2px dashed currentColor;
   border-radius: 15px;
   padding: 12px;
   color: @theme_unfocused_fg_color;
}
.target-btn-drop-hover {
   background-color: color-mix(in srgb, @theme_selected_bg_color 20%, transparent);
   border: 2px solid @theme_selected_bg_color;
   color: @theme_selected_fg_color;
}
";

/// Label of the compact affordance for `count` files.
///
/// # Examples
///
/// ```
/// use phoenix::ui::style::file_count_label;
///
/// assert_eq!(file_count_label(0), "0 file(s)");
/// assert_eq!(file_count_label(3), "3 file(s)");
/// ```
#[must_use]
pub fn file_count_label(count: usize) -> String {
    format!("{count} file(s)")
}

/// CSS applied to the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    css: String,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self {
            css: DEFAULT_CSS.to_string(),
        }
    }
}

impl Stylesheet {
    /// Loads a stylesheet from a CSS file.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Config`] if the file cannot be read or is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let css = fs::read_to_string(path).map_err(|e| {
            PhoenixError::Config(format!("failed to read style file {}: {e}", path.display()))
        })?;
        if css.trim().is_empty() {
            return Err(PhoenixError::Config(format!(
                "style file {} is empty",
                path.display()
            )));
        }
        Ok(Self { css })
    }

    /// Loads `path` if given, falling back to the built-in stylesheet when it
    /// cannot be used.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.map_or_else(Self::default, |path| {
            Self::from_file(path).unwrap_or_else(|e| {
                tracing::warn!(style_file = %path.display(), error = %e, "using built-in stylesheet");
                Self::default()
            })
        })
    }

    /// The CSS text.
    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }
}
