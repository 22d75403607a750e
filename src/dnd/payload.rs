//! Drag payload construction.
//!
//! A payload is built fresh for every drag gesture and never outlives it. It
//! borrows from the registry and carries either the single file bound to the
//! affordance the gesture started on, or the whole registry.

use super::registry::FileRegistry;
use crate::domain::{FileReference, ModeFlags, PhoenixError, Result};
use serde::Serialize;
use url::Url;

/// MIME type of a file list serialized as RFC 2483 `text/uri-list`.
pub const URI_LIST_MIME: &str = "text/uri-list";

/// Formats a drop target accepts as a file list.
pub const FILE_LIST_FORMATS: &[&str] = &[
    URI_LIST_MIME,
    "application/vnd.portal.files",
    "application/vnd.portal.filetransfer",
];

/// The affordance a drag gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// The single "N file(s)" affordance of the compact layout.
    Compact,
    /// The per-file affordance bound to the registry entry at this index.
    Item(usize),
}

/// The only action offered and accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAction {
    /// The receiver copies; the source keeps its files.
    Copy,
}

/// Whether a payload carries one file or the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    /// The file bound to the originating affordance.
    Single,
    /// Every registered file, in registry order.
    Aggregate,
}

/// Items offered by one drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload<'a> {
    kind: PayloadKind,
    files: Vec<&'a FileReference>,
}

impl<'a> DragPayload<'a> {
    /// Whether this payload is a single file or the aggregate.
    #[must_use]
    pub const fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Files carried by the payload.
    #[must_use]
    pub fn files(&self) -> &[&'a FileReference] {
        &self.files
    }

    /// Number of files carried.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the payload carries nothing (aggregate of an empty registry).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// URIs of the carried files.
    #[must_use]
    pub fn uris(&self) -> Vec<Url> {
        self.files.iter().map(|f| f.uri().clone()).collect()
    }

    /// Serializes the payload as a `text/uri-list` body (CRLF line endings).
    #[must_use]
    pub fn to_uri_list(&self) -> String {
        self.files
            .iter()
            .map(|f| format!("{}\r\n", f.uri()))
            .collect()
    }
}

/// Builds the payload for a drag gesture starting at `origin`.
///
/// The compact affordance always drags the aggregate. A per-file affordance
/// drags the aggregate when `drag_all` is set and only its own file otherwise.
/// The registry is only read.
///
/// # Errors
///
/// Returns [`PhoenixError::UnknownItem`] when `origin` names an index with no
/// registry entry.
///
/// # Examples
///
/// ```no_run
/// use phoenix::dnd::{build_payload, DragOrigin, FileRegistry, PayloadKind};
/// use phoenix::ModeFlags;
/// use std::path::Path;
///
/// let registry = FileRegistry::build(&["a.txt", "b.txt"], Path::new("/work"));
/// let flags = ModeFlags { drag_all: true, ..ModeFlags::default() };
/// let payload = build_payload(&flags, &registry, DragOrigin::Item(0))?;
/// assert_eq!(payload.kind(), PayloadKind::Aggregate);
/// assert_eq!(payload.len(), registry.len());
/// # Ok::<(), phoenix::PhoenixError>(())
/// ```
pub fn build_payload<'a>(
    flags: &ModeFlags,
    registry: &'a FileRegistry,
    origin: DragOrigin,
) -> Result<DragPayload<'a>> {
    let _span = tracing::debug_span!("build_payload",
        origin = ?origin,
        drag_all = flags.drag_all,
        drag_all_compact = flags.drag_all_compact
    ).entered();

    let payload = match origin {
        DragOrigin::Compact => aggregate(registry),
        DragOrigin::Item(index) => {
            let file = registry.get(index).ok_or(PhoenixError::UnknownItem {
                index,
                len: registry.len(),
            })?;
            if flags.drag_all {
                aggregate(registry)
            } else {
                DragPayload {
                    kind: PayloadKind::Single,
                    files: vec![file],
                }
            }
        }
    };

    tracing::debug!(kind = ?payload.kind, files = payload.len(), "payload built");
    Ok(payload)
}

fn aggregate(registry: &FileRegistry) -> DragPayload<'_> {
    DragPayload {
        kind: PayloadKind::Aggregate,
        files: registry.files().iter().collect(),
    }
}
