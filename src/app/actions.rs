//! Actions representing side effects to be executed by the host.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! host executes them in order; the core never performs I/O itself.
//!
//! # Example
//!
//! ```rust
//! use phoenix::app::Action;
//!
//! let actions = vec![
//!     Action::Emit { lines: vec!["file:///tmp/a".to_string()] },
//!     Action::FinishDrop { accepted: true },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::dnd::{DragAction, PayloadKind};
use url::Url;

/// Commands for the host, produced by [`crate::app::handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand this payload to the toolkit's drag source.
    OfferPayload {
        /// Single file or aggregate.
        kind: PayloadKind,
        /// Files to offer, in order.
        uris: Vec<Url>,
        /// The same files as a `text/uri-list` body.
        uri_list: String,
    },

    /// Turn hover feedback on the drop zone on or off.
    Hover {
        /// Whether the hover class should be applied.
        active: bool,
    },

    /// Accept the entering drag with this action.
    AcceptDrag {
        /// Action to advertise.
        action: DragAction,
    },

    /// Refuse the entering drag.
    RejectDrag,

    /// Write these lines to standard output, in order.
    Emit {
        /// One line per dropped file.
        lines: Vec<String>,
    },

    /// Report the drop result to the toolkit.
    FinishDrop {
        /// `true` signals success to the drag source.
        accepted: bool,
    },

    /// Close the window and end the session.
    Close,
}
