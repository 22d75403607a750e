//! Application layer coordinating session state, events, and actions.
//!
//! This module sits between the host (the toolkit event loop, or the JSON-lines
//! bridge in `main.rs`) and the drag-and-drop core.
//!
//! # Architecture
//!
//! ```text
//! Gesture callback → Event → handle_event → Session mutation → Actions → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands returned to the host
//! - [`handler`]: Event processing and state transitions
//! - [`session`]: The session object and view model computation

pub mod actions;
pub mod handler;
pub mod session;

pub use actions::Action;
pub use handler::{handle_event, Event, CLOSE_KEY};
pub use session::Session;
