//! Wire types of the host bridge.
//!
//! Each stdin line is one [`HostMessage`], internally tagged by `event`:
//!
//! ```text
//! {"event":"drag_begin","item":0}
//! {"event":"drag_begin"}
//! {"event":"drag_end","accepted":true}
//! {"event":"drop_enter","formats":["text/uri-list"]}
//! {"event":"drop_leave"}
//! {"event":"drop","uris":["file:///tmp/a"]}
//! {"event":"drop","uri_list":"file:///tmp/a\r\n"}
//! {"event":"key","key":"q"}
//! ```
//!
//! In source mode each [`HostReply`] is written back as one stdout line,
//! tagged by `reply`.

use crate::app::Event;
use crate::dnd::{DragOrigin, DropData, PayloadKind};
use crate::domain::{PhoenixError, Result};
use crate::ui::View;
use serde::{Deserialize, Serialize};
use url::Url;

/// Gesture notifications sent by the host process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostMessage {
    /// A drag started on a source affordance.
    DragBegin {
        /// Registry index of the per-file button; absent for the compact button.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<usize>,
    },

    /// A drag started here finished.
    DragEnd {
        /// Whether the receiver accepted the drop.
        accepted: bool,
    },

    /// A drag entered the drop zone.
    DropEnter {
        /// MIME types the drag offers.
        #[serde(default)]
        formats: Vec<String>,
    },

    /// A drag left the drop zone.
    DropLeave,

    /// Data was dropped. Exactly one of the two fields must be present.
    Drop {
        /// Delivered as a file list.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uris: Option<Vec<String>>,

        /// Delivered as a raw `text/uri-list` body.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        uri_list: Option<String>,
    },

    /// A key was pressed.
    Key {
        /// The character typed.
        key: char,
    },
}

impl HostMessage {
    /// Parses one stdin line.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Protocol`] if the line is not a known message.
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| PhoenixError::Protocol(format!("{e}: {line}")))
    }

    /// Converts the message into the application event it announces.
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Protocol`] for a `drop` carrying both or
    /// neither of `uris` and `uri_list`.
    pub fn into_event(self) -> Result<Event> {
        let event = match self {
            Self::DragBegin { item: Some(index) } => Event::DragBegin {
                origin: DragOrigin::Item(index),
            },
            Self::DragBegin { item: None } => Event::DragBegin {
                origin: DragOrigin::Compact,
            },
            Self::DragEnd { accepted } => Event::DragEnd { accepted },
            Self::DropEnter { formats } => Event::DropEnter { formats },
            Self::DropLeave => Event::DropLeave,
            Self::Drop {
                uris: Some(uris),
                uri_list: None,
            } => Event::Drop {
                data: DropData::Uris(uris),
            },
            Self::Drop {
                uris: None,
                uri_list: Some(body),
            } => Event::Drop {
                data: DropData::UriList(body),
            },
            Self::Drop { .. } => {
                return Err(PhoenixError::Protocol(
                    "drop needs exactly one of `uris` or `uri_list`".to_string(),
                ))
            }
            Self::Key { key } => Event::Key(key),
        };
        Ok(event)
    }
}

/// Messages written back to the host in source mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum HostReply {
    /// What to draw, sent once at startup.
    View {
        /// The layout and its affordances.
        view: View,
        /// Stylesheet to install.
        css: String,
    },

    /// Data to hand to the toolkit drag source for the current gesture.
    Payload {
        /// Single file or aggregate.
        kind: PayloadKind,
        /// File URIs, in order.
        uris: Vec<String>,
        /// The same files as a `text/uri-list` body.
        uri_list: String,
    },
}

impl HostReply {
    /// Builds a payload reply from offered URIs and their `text/uri-list` body.
    #[must_use]
    pub fn payload(kind: PayloadKind, uris: &[Url], uri_list: &str) -> Self {
        Self::Payload {
            kind,
            uris: uris.iter().map(ToString::to_string).collect(),
            uri_list: uri_list.to_string(),
        }
    }

    /// Serializes the reply as a single JSON line (without the newline).
    ///
    /// # Errors
    ///
    /// Returns [`PhoenixError::Protocol`] if serialization fails.
    pub fn to_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PhoenixError::Protocol(e.to_string()))
    }
}
