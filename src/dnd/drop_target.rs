//! Drop target state machine.
//!
//! ```text
//!            enter (file list offered)
//!   ┌──────┐ ───────────────────────▶ ┌──────────┐
//!   │ Idle │                          │ Hovering │
//!   └──────┘ ◀─────────────────────── └──────────┘
//!               leave | drop
//! ```
//!
//! A drop is decoded completely before anything is emitted: a payload with one
//! bad entry yields no lines at all.

use super::payload::{DragAction, FILE_LIST_FORMATS};
use crate::domain::{PhoenixError, Result};
use std::path::PathBuf;
use url::Url;

/// Hover state of a drop target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropState {
    /// No drag is over the target.
    #[default]
    Idle,
    /// A compatible drag is over the target.
    Hovering,
}

/// How each dropped file is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The file's URI, e.g. `file:///tmp/a%20b.txt`.
    #[default]
    Uri,
    /// The file's local path, e.g. `/tmp/a b.txt`.
    Path,
}

/// A drop payload as delivered by the host, borrowed for the call only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveredPayload<'a> {
    /// One URI string per file.
    Uris(&'a [String]),
    /// A `text/uri-list` body.
    UriList(&'a str),
}

/// Owned drop data, as carried by an [`crate::app::Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropData {
    /// One URI string per file.
    Uris(Vec<String>),
    /// A `text/uri-list` body.
    UriList(String),
}

impl DropData {
    /// Borrows the data for a single drop callback.
    #[must_use]
    pub fn as_delivered(&self) -> DeliveredPayload<'_> {
        match self {
            Self::Uris(uris) => DeliveredPayload::Uris(uris),
            Self::UriList(body) => DeliveredPayload::UriList(body),
        }
    }
}

/// Outcome of an enter notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// The drag offers a file list; hover feedback is on.
    Accepted(DragAction),
    /// Nothing the target understands is offered.
    Refused,
}

/// A file extracted from a drop payload. Lives only while the drop is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DroppedFile {
    uri: Url,
    path: Option<PathBuf>,
}

/// Drop target with hover state and output formatting.
#[derive(Debug, Clone, Default)]
pub struct DropTarget {
    state: DropState,
    format: OutputFormat,
}

impl DropTarget {
    /// Creates an idle target printing in `format`.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self {
            state: DropState::Idle,
            format,
        }
    }

    /// Current hover state.
    #[must_use]
    pub const fn state(&self) -> DropState {
        self.state
    }

    /// Whether a compatible drag is over the target.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.state == DropState::Hovering
    }

    /// Handles a drag entering the target.
    ///
    /// Moves to [`DropState::Hovering`] and accepts with
    /// [`DragAction::Copy`] when any of `offered` is a file-list format.
    /// Otherwise the state is unchanged and the drag is refused.
    pub fn on_enter<S: AsRef<str>>(&mut self, offered: &[S]) -> EnterOutcome {
        let compatible = offered
            .iter()
            .any(|format| FILE_LIST_FORMATS.contains(&format.as_ref()));

        tracing::debug!(
            compatible = compatible,
            offered = offered.len(),
            state = ?self.state,
            "drag entered"
        );

        if compatible {
            self.state = DropState::Hovering;
            EnterOutcome::Accepted(DragAction::Copy)
        } else {
            EnterOutcome::Refused
        }
    }

    /// Handles a drag leaving without a drop. Returns whether hover feedback
    /// was on and must be cleared.
    pub fn on_leave(&mut self) -> bool {
        let was_hovering = self.is_hovering();
        self.state = DropState::Idle;
        tracing::debug!(was_hovering = was_hovering, "drag left");
        was_hovering
    }

    /// Handles a drop and returns the lines to print, one per file, in
    /// delivery order.
    ///
    /// The target is idle afterwards whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::MalformedDropPayload`] when the target was not
    /// hovering, when an entry is not an absolute URI, or when paths are
    /// requested and an entry has no local path. No lines are produced then.
    ///
    /// # Examples
    ///
    /// ```
    /// use phoenix::dnd::{DeliveredPayload, DropTarget, OutputFormat};
    ///
    /// let mut target = DropTarget::new(OutputFormat::Path);
    /// target.on_enter(&["text/uri-list"]);
    /// let uris = vec!["file:///tmp/a%20b.txt".to_string()];
    /// let lines = target.on_drop(DeliveredPayload::Uris(&uris))?;
    /// assert_eq!(lines, ["/tmp/a b.txt"]);
    /// # Ok::<(), phoenix::PhoenixError>(())
    /// ```
    pub fn on_drop(&mut self, payload: DeliveredPayload<'_>) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("on_drop", format = ?self.format).entered();

        let was_hovering = self.is_hovering();
        self.state = DropState::Idle;

        if !was_hovering {
            return Err(PhoenixError::MalformedDropPayload(
                "drop delivered without a preceding enter".to_string(),
            ));
        }

        let files = extract(payload)?;
        let lines = files
            .into_iter()
            .map(|file| self.format_line(file))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(files = lines.len(), "drop accepted");
        Ok(lines)
    }

    fn format_line(&self, file: DroppedFile) -> Result<String> {
        match self.format {
            OutputFormat::Uri => Ok(file.uri.into()),
            OutputFormat::Path => file
                .path
                .map(|p| p.display().to_string())
                .ok_or_else(|| {
                    PhoenixError::MalformedDropPayload(format!("{} has no local path", file.uri))
                }),
        }
    }
}

/// Decodes every entry of a delivered payload.
fn extract(payload: DeliveredPayload<'_>) -> Result<Vec<DroppedFile>> {
    match payload {
        DeliveredPayload::Uris(uris) => uris.iter().map(|u| decode(u)).collect(),
        DeliveredPayload::UriList(body) => parse_uri_list(body).into_iter().map(decode).collect(),
    }
}

fn decode(raw: &str) -> Result<DroppedFile> {
    let uri = Url::parse(raw)
        .map_err(|e| PhoenixError::MalformedDropPayload(format!("{raw:?}: {e}")))?;
    let path = if uri.scheme() == "file" {
        uri.to_file_path().ok()
    } else {
        None
    };
    Ok(DroppedFile { uri, path })
}

/// Splits a `text/uri-list` body into entries.
///
/// Lines may end in CRLF or LF; blank lines and `#` comments are skipped.
///
/// # Examples
///
/// ```
/// use phoenix::dnd::parse_uri_list;
///
/// let body = "# comment\r\nfile:///a\r\n\r\nfile:///b\n";
/// assert_eq!(parse_uri_list(body), ["file:///a", "file:///b"]);
/// ```
#[must_use]
pub fn parse_uri_list(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn hovering(format: OutputFormat) -> DropTarget {
        let mut target = DropTarget::new(format);
        assert_eq!(
            target.on_enter(&["text/uri-list"]),
            EnterOutcome::Accepted(DragAction::Copy)
        );
        target
    }

    #[test]
    fn enter_moves_to_hovering() {
        let target = hovering(OutputFormat::Uri);
        assert_eq!(target.state(), DropState::Hovering);
    }

    #[test]
    fn incompatible_enter_is_refused() {
        let mut target = DropTarget::default();
        assert_eq!(target.on_enter(&["text/plain"]), EnterOutcome::Refused);
        assert_eq!(target.state(), DropState::Idle);
    }

    #[test]
    fn leave_returns_to_idle() {
        let mut target = hovering(OutputFormat::Uri);
        assert!(target.on_leave());
        assert_eq!(target.state(), DropState::Idle);
        assert!(!target.on_leave());
    }

    #[test]
    fn drop_emits_one_line_per_file_in_order() {
        let mut target = hovering(OutputFormat::Uri);
        let delivered = uris(&["file:///tmp/b", "file:///tmp/a", "file:///tmp/c"]);

        let lines = target.on_drop(DeliveredPayload::Uris(&delivered)).unwrap();

        assert_eq!(lines, delivered);
        assert_eq!(target.state(), DropState::Idle);
    }

    #[test]
    fn print_path_switches_every_line_to_path_form() {
        let delivered = uris(&["file:///tmp/x%20y", "file:///etc/hosts"]);

        let as_uri = hovering(OutputFormat::Uri)
            .on_drop(DeliveredPayload::Uris(&delivered))
            .unwrap();
        let as_path = hovering(OutputFormat::Path)
            .on_drop(DeliveredPayload::Uris(&delivered))
            .unwrap();

        assert_eq!(as_uri.len(), as_path.len());
        assert_eq!(as_path, ["/tmp/x y", "/etc/hosts"]);
        for (uri, path) in as_uri.iter().zip(&as_path) {
            let decoded = Url::parse(uri).unwrap().to_file_path().unwrap();
            assert_eq!(&decoded.display().to_string(), path);
        }
    }

    #[test]
    fn malformed_entry_rejects_whole_drop() {
        let mut target = hovering(OutputFormat::Uri);
        let delivered = uris(&["file:///tmp/a", "not a uri"]);

        let err = target.on_drop(DeliveredPayload::Uris(&delivered)).unwrap_err();

        assert!(matches!(err, PhoenixError::MalformedDropPayload(_)));
        assert_eq!(target.state(), DropState::Idle);
    }

    #[test]
    fn remote_uri_has_no_path() {
        let mut target = hovering(OutputFormat::Path);
        let delivered = uris(&["https://example.com/a"]);
        assert!(target.on_drop(DeliveredPayload::Uris(&delivered)).is_err());

        let mut target = hovering(OutputFormat::Uri);
        let lines = target.on_drop(DeliveredPayload::Uris(&delivered)).unwrap();
        assert_eq!(lines, ["https://example.com/a"]);
    }

    #[test]
    fn drop_without_enter_is_rejected() {
        let mut target = DropTarget::default();
        let delivered = uris(&["file:///tmp/a"]);
        assert!(target.on_drop(DeliveredPayload::Uris(&delivered)).is_err());
    }

    #[test]
    fn uri_list_body_is_decoded() {
        let mut target = hovering(OutputFormat::Path);
        let lines = target
            .on_drop(DeliveredPayload::UriList("file:///a\r\n# skip\r\nfile:///b\r\n"))
            .unwrap();
        assert_eq!(lines, ["/a", "/b"]);
    }

    #[test]
    fn empty_drop_is_accepted_with_no_lines() {
        let mut target = hovering(OutputFormat::Uri);
        let lines = target.on_drop(DeliveredPayload::Uris(&[])).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn enter_leave_cycles_never_emit() {
        let mut target = DropTarget::default();
        for _ in 0..5 {
            target.on_enter(&["text/uri-list"]);
            target.on_leave();
        }
        assert_eq!(target.state(), DropState::Idle);
    }
}
