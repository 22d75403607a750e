//! Drag-and-drop mediation core.
//!
//! Pure, synchronous handlers the host UI layer calls from its event loop. No
//! type in here knows about widgets.
//!
//! # Modules
//!
//! - [`registry`]: Validated set of files a source offers
//! - [`payload`]: Per-gesture payload construction
//! - [`drop_target`]: Hover/drop state machine and identifier extraction
//! - [`lifecycle`]: Exit-after-drop policy

pub mod drop_target;
pub mod lifecycle;
pub mod payload;
pub mod registry;

pub use drop_target::{
    parse_uri_list, DeliveredPayload, DropData, DropState, DropTarget, EnterOutcome, OutputFormat,
};
pub use lifecycle::LifecycleController;
pub use payload::{
    build_payload, DragAction, DragOrigin, DragPayload, PayloadKind, FILE_LIST_FORMATS,
    URI_LIST_MIME,
};
pub use registry::{FileRegistry, RejectedInput};
