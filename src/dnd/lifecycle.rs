//! Exit-after-drop policy.

use crate::domain::Mode;

/// Decides whether a finished drag ends the session.
///
/// Fires at most once, on the first drag-end seen in source mode with
/// `exit_after_drop` set, whether or not the receiver accepted the drop.
#[derive(Debug, Clone)]
pub struct LifecycleController {
    mode: Mode,
    exit_after_drop: bool,
    fired: bool,
}

impl LifecycleController {
    /// Creates a controller for `mode`.
    #[must_use]
    pub const fn new(mode: Mode, exit_after_drop: bool) -> Self {
        Self {
            mode,
            exit_after_drop,
            fired: false,
        }
    }

    /// Observes a drag-end notification. Returns `true` exactly when the
    /// session should terminate now.
    pub fn on_drag_end(&mut self, accepted: bool) -> bool {
        if self.mode != Mode::Source || !self.exit_after_drop || self.fired {
            tracing::debug!(accepted = accepted, fired = self.fired, "drag end ignored");
            return false;
        }
        self.fired = true;
        tracing::info!(accepted = accepted, "drag finished, ending session");
        true
    }

    /// Whether termination has already been requested.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_in_source_mode() {
        let mut lifecycle = LifecycleController::new(Mode::Source, true);
        assert!(lifecycle.on_drag_end(false));
        assert!(lifecycle.has_fired());
        assert!(!lifecycle.on_drag_end(true));
    }

    #[test]
    fn never_fires_without_flag() {
        let mut lifecycle = LifecycleController::new(Mode::Source, false);
        assert!(!lifecycle.on_drag_end(true));
        assert!(!lifecycle.has_fired());
    }

    #[test]
    fn never_fires_in_target_mode() {
        let mut lifecycle = LifecycleController::new(Mode::Target, true);
        assert!(!lifecycle.on_drag_end(true));
    }
}
