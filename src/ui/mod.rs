//! Presentation layer: what the host should draw.
//!
//! The host owns the widgets; this module only describes them.
//!
//! ```text
//! Session → view() → View → host widgets
//!                  ↘ Stylesheet → host CSS provider
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types
//! - [`style`]: Stylesheet and CSS class names

pub mod style;
pub mod viewmodel;

pub use style::Stylesheet;
pub use viewmodel::{Affordance, ItemView, View};
