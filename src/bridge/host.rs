//! The headless host loop.
//!
//! Reads [`HostMessage`] lines, feeds them to [`handle_event`] and executes the
//! returned [`Action`]s against an output stream:
//!
//! | Action          | Source mode             | Target mode        |
//! |-----------------|-------------------------|--------------------|
//! | `OfferPayload`  | `payload` reply line    | n/a                |
//! | `Emit`          | n/a                     | one line per file  |
//! | `Close`         | stop                    | stop               |
//! | feedback        | logged                  | logged             |

use super::messages::{HostMessage, HostReply};
use crate::app::{handle_event, Action, Event, Session};
use crate::domain::{Mode, Result};
use crate::ui::Stylesheet;
use std::io::{BufRead, Write};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Stdin reached end of file.
    EndOfInput,
    /// The session asked to close (`q`, or exit after drop).
    Closed,
}

/// Owns the session and the output stream for the lifetime of the process.
#[derive(Debug)]
pub struct Host<W: Write> {
    session: Session,
    stylesheet: Stylesheet,
    out: W,
}

impl<W: Write> Host<W> {
    /// Wraps a session; `out` receives drop lines or replies.
    pub const fn new(session: Session, stylesheet: Stylesheet, out: W) -> Self {
        Self {
            session,
            stylesheet,
            out,
        }
    }

    /// Announces the layout. In target mode stdout is reserved for drop
    /// lines, so the view is only logged.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the reply cannot be written.
    pub fn start(&mut self) -> Result<()> {
        let view = self.session.view();
        if self.session.mode() == Mode::Source {
            let reply = HostReply::View {
                view,
                css: self.stylesheet.css().to_string(),
            };
            self.reply(&reply)?;
        } else {
            tracing::debug!(view = ?view, "target ready");
        }
        Ok(())
    }

    /// Processes messages from `input` until end of input or a close action.
    ///
    /// Lines that are not valid messages, including lines that are not
    /// UTF-8, are reported and skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if stdin cannot be read or stdout cannot be
    /// written.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<Exit> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    tracing::warn!(error = %e, bytes = buf.len(), "skipping host message that is not utf-8");
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            if self.process_line(line)? == Some(Exit::Closed) {
                return Ok(Exit::Closed);
            }
        }
        tracing::debug!("end of input");
        Ok(Exit::EndOfInput)
    }

    /// Handles one message line.
    ///
    /// Returns `Some(Exit::Closed)` when the session asked to close.
    ///
    /// # Errors
    ///
    /// Only output failures are errors; bad lines and refused requests are
    /// logged.
    pub fn process_line(&mut self, line: &str) -> Result<Option<Exit>> {
        let event = match HostMessage::parse(line).and_then(HostMessage::into_event) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "skipping host message");
                return Ok(None);
            }
        };
        self.dispatch(&event)
    }

    fn dispatch(&mut self, event: &Event) -> Result<Option<Exit>> {
        let actions = match handle_event(&mut self.session, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    should_render = should_render,
                    actions = actions.len(),
                    "event handled successfully"
                );
                actions
            }
            Err(e) => {
                tracing::warn!(error = %e, "request refused");
                return Ok(None);
            }
        };

        for action in &actions {
            if self.execute_action(action)? {
                return Ok(Some(Exit::Closed));
            }
        }
        Ok(None)
    }

    /// Executes one action; returns `true` for [`Action::Close`].
    fn execute_action(&mut self, action: &Action) -> Result<bool> {
        match action {
            Action::OfferPayload {
                kind,
                uris,
                uri_list,
            } => {
                self.reply(&HostReply::payload(*kind, uris, uri_list))?;
            }
            Action::Emit { lines } => {
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
                self.out.flush()?;
            }
            Action::Hover { active } => tracing::debug!(active = active, "hover feedback"),
            Action::AcceptDrag { action } => tracing::debug!(action = ?action, "drag accepted"),
            Action::RejectDrag => tracing::debug!("drag refused"),
            Action::FinishDrop { accepted } => {
                tracing::debug!(accepted = accepted, "drop finished");
            }
            Action::Close => {
                tracing::info!("closing");
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn reply(&mut self, reply: &HostReply) -> Result<()> {
        writeln!(self.out, "{}", reply.to_line()?)?;
        self.out.flush()?;
        Ok(())
    }
}
