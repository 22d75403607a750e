//! JSON-lines bridge between a host UI process and the session.
//!
//! The toolkit side (or a test harness) owns the window and forwards gesture
//! callbacks as one JSON object per stdin line. The binary answers on stdout.
//!
//! ```text
//! host UI ──stdin JSON──▶ HostMessage → Event → handle_event → Actions
//!    ▲                                                           │
//!    └──────────── stdout: HostReply (source) | drop lines (target)
//! ```
//!
//! # Modules
//!
//! - [`messages`]: Wire types
//! - [`host`]: Read/dispatch/execute loop

pub mod host;
pub mod messages;

pub use host::{Exit, Host};
pub use messages::{HostMessage, HostReply};
