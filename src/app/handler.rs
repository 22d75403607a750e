//! Event handling and state transition logic.
//!
//! The host translates toolkit callbacks into [`Event`]s and calls
//! [`handle_event`], which mutates the [`Session`] and returns the side effects
//! to perform.
//!
//! # Event Types
//!
//! - **Source side**: `DragBegin`, `DragEnd`
//! - **Target side**: `DropEnter`, `DropLeave`, `Drop`
//! - **Input**: `Key`
//!
//! Events that do not apply to the session's mode are ignored.
//!
//! # Example
//!
//! ```rust
//! use phoenix::app::{handle_event, Action, Event, Session};
//! use phoenix::{ModeConfig, ModeFlags};
//! use std::path::Path;
//!
//! let mut session = Session::new(ModeConfig::target(ModeFlags::default()), Path::new("/"));
//! let event = Event::DropEnter { formats: vec!["text/uri-list".to_string()] };
//! let (render, actions) = handle_event(&mut session, &event)?;
//! assert!(render);
//! assert!(actions.contains(&Action::Hover { active: true }));
//! # Ok::<(), phoenix::PhoenixError>(())
//! ```

use super::{Action, Session};
use crate::dnd::{build_payload, DragOrigin, DropData, EnterOutcome};
use crate::domain::{Mode, Result};

/// Key that closes the window.
pub const CLOSE_KEY: char = 'q';

/// Notifications delivered by the host, in gesture order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user started dragging from an affordance.
    DragBegin {
        /// Affordance the drag started on.
        origin: DragOrigin,
    },

    /// A drag started here finished.
    DragEnd {
        /// Whether the receiver accepted the drop.
        accepted: bool,
    },

    /// A drag entered the drop zone.
    DropEnter {
        /// MIME types the drag offers.
        formats: Vec<String>,
    },

    /// A drag left the drop zone without dropping.
    DropLeave,

    /// Something was dropped on the drop zone.
    Drop {
        /// The delivered data.
        data: DropData,
    },

    /// A key was pressed in the window.
    Key(char),
}

/// Processes an event, mutates the session, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model changed, and the side
/// effects to execute in order.
///
/// # Errors
///
/// Returns [`crate::PhoenixError::UnknownItem`] when a drag begins on an affordance
/// that has no registry entry. Malformed drops are not errors: they produce a
/// `FinishDrop { accepted: false }` action.
pub fn handle_event(session: &mut Session, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event), mode = ?session.mode()).entered();

    match event {
        Event::DragBegin { origin } => {
            if session.mode() != Mode::Source {
                tracing::debug!("drag begin ignored outside source mode");
                return Ok((false, vec![]));
            }
            let payload = build_payload(session.flags(), session.registry(), *origin)?;
            Ok((
                false,
                vec![Action::OfferPayload {
                    kind: payload.kind(),
                    uris: payload.uris(),
                    uri_list: payload.to_uri_list(),
                }],
            ))
        }
        Event::DragEnd { accepted } => {
            if session.lifecycle_mut().on_drag_end(*accepted) {
                Ok((false, vec![Action::Close]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::DropEnter { formats } => {
            let Some(target) = session.drop_target_mut() else {
                return Ok((false, vec![]));
            };
            let was_hovering = target.is_hovering();
            match target.on_enter(formats.as_slice()) {
                EnterOutcome::Accepted(action) => Ok((
                    !was_hovering,
                    vec![Action::Hover { active: true }, Action::AcceptDrag { action }],
                )),
                EnterOutcome::Refused => {
                    tracing::debug!(formats = ?formats, "no file list offered");
                    Ok((false, vec![Action::RejectDrag]))
                }
            }
        }
        Event::DropLeave => {
            let Some(target) = session.drop_target_mut() else {
                return Ok((false, vec![]));
            };
            if target.on_leave() {
                Ok((true, vec![Action::Hover { active: false }]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::Drop { data } => {
            let Some(target) = session.drop_target_mut() else {
                return Ok((false, vec![]));
            };
            let was_hovering = target.is_hovering();
            let mut actions = match target.on_drop(data.as_delivered()) {
                Ok(lines) => vec![
                    Action::Emit { lines },
                    Action::FinishDrop { accepted: true },
                ],
                Err(e) => {
                    tracing::warn!(error = %e, "drop rejected");
                    vec![Action::FinishDrop { accepted: false }]
                }
            };
            if was_hovering {
                actions.push(Action::Hover { active: false });
            }
            Ok((was_hovering, actions))
        }
        Event::Key(CLOSE_KEY) => Ok((false, vec![Action::Close])),
        Event::Key(_) => Ok((false, vec![])),
    }
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::DragBegin { .. } => "DragBegin",
        Event::DragEnd { .. } => "DragEnd",
        Event::DropEnter { .. } => "DropEnter",
        Event::DropLeave => "DropLeave",
        Event::Drop { .. } => "Drop",
        Event::Key(_) => "Key",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dnd::PayloadKind;
    use crate::domain::{ModeConfig, ModeFlags, PhoenixError};
    use std::fs;
    use std::path::Path;

    fn source_session(dir: &Path, flags: ModeFlags, names: &[&str]) -> Session {
        for name in names {
            fs::write(dir.join(name), name).unwrap();
        }
        let files = names.iter().map(ToString::to_string).collect();
        Session::new(ModeConfig::source(flags, files), dir)
    }

    fn target_session(print_path: bool) -> Session {
        let flags = ModeFlags {
            print_path,
            ..ModeFlags::default()
        };
        Session::new(ModeConfig::target(flags), Path::new("/"))
    }

    fn enter() -> Event {
        Event::DropEnter {
            formats: vec!["text/uri-list".to_string()],
        }
    }

    fn drop_uris(uris: &[&str]) -> Event {
        Event::Drop {
            data: DropData::Uris(uris.iter().map(ToString::to_string).collect()),
        }
    }

    #[test]
    fn drag_all_offers_every_file_from_any_item() {
        let dir = tempfile::tempdir().unwrap();
        let flags = ModeFlags {
            drag_all: true,
            ..ModeFlags::default()
        };
        let mut session = source_session(dir.path(), flags, &["a", "b", "c"]);

        for index in 0..3 {
            let event = Event::DragBegin {
                origin: DragOrigin::Item(index),
            };
            let (_, actions) = handle_event(&mut session, &event).unwrap();
            match &actions[..] {
                [Action::OfferPayload {
                    kind,
                    uris,
                    uri_list,
                }] => {
                    assert_eq!(*kind, PayloadKind::Aggregate);
                    assert_eq!(uris.len(), 3);
                    assert_eq!(uri_list.matches("\r\n").count(), 3);
                }
                other => panic!("unexpected actions: {other:?}"),
            }
        }
    }

    #[test]
    fn drag_from_missing_item_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = source_session(dir.path(), ModeFlags::default(), &["a"]);
        let event = Event::DragBegin {
            origin: DragOrigin::Item(1),
        };
        let err = handle_event(&mut session, &event).unwrap_err();
        assert!(matches!(err, PhoenixError::UnknownItem { index: 1, len: 1 }));
    }

    #[test]
    fn print_path_drop_emits_paths_in_order() {
        let mut session = target_session(true);
        handle_event(&mut session, &enter()).unwrap();

        let (render, actions) =
            handle_event(&mut session, &drop_uris(&["file:///tmp/second", "file:///tmp/first"])).unwrap();

        assert!(render);
        assert_eq!(
            actions,
            vec![
                Action::Emit {
                    lines: vec!["/tmp/second".to_string(), "/tmp/first".to_string()]
                },
                Action::FinishDrop { accepted: true },
                Action::Hover { active: false },
            ]
        );
    }

    #[test]
    fn malformed_drop_is_rejected_without_output() {
        let mut session = target_session(false);
        handle_event(&mut session, &enter()).unwrap();

        let (_, actions) = handle_event(&mut session, &drop_uris(&["::nonsense::"])).unwrap();

        assert!(actions.contains(&Action::FinishDrop { accepted: false }));
        assert!(!actions.iter().any(|a| matches!(a, Action::Emit { .. })));
        assert!(!session.drop_target().unwrap().is_hovering());
    }

    #[test]
    fn leave_clears_hover_without_output() {
        let mut session = target_session(false);
        for _ in 0..3 {
            handle_event(&mut session, &enter()).unwrap();
            let (render, actions) = handle_event(&mut session, &Event::DropLeave).unwrap();
            assert!(render);
            assert_eq!(actions, vec![Action::Hover { active: false }]);
        }
    }

    #[test]
    fn and_exit_closes_once() {
        let dir = tempfile::tempdir().unwrap();
        let flags = ModeFlags {
            exit_after_drop: true,
            ..ModeFlags::default()
        };
        let mut session = source_session(dir.path(), flags, &["a"]);

        let end = Event::DragEnd { accepted: false };
        let (_, first) = handle_event(&mut session, &end).unwrap();
        let (_, second) = handle_event(&mut session, &end).unwrap();

        assert_eq!(first, vec![Action::Close]);
        assert!(second.is_empty());
    }

    #[test]
    fn target_events_are_ignored_in_source_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = source_session(dir.path(), ModeFlags::default(), &["a"]);

        let (render, actions) = handle_event(&mut session, &enter()).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn q_closes() {
        let mut session = target_session(false);
        let (_, actions) = handle_event(&mut session, &Event::Key('q')).unwrap();
        assert_eq!(actions, vec![Action::Close]);
        let (_, actions) = handle_event(&mut session, &Event::Key('x')).unwrap();
        assert!(actions.is_empty());
    }
}
