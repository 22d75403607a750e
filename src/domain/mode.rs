//! Operating mode and flags, fixed once at startup.

/// Whether the session offers files or receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Offer the configured files as drag sources.
    Source,
    /// Present a drop zone and print what is dropped on it.
    Target,
}

/// Behavior flags. Source flags are ignored in target mode and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    /// Terminate after the first completed drag (`--and-exit`).
    pub exit_after_drop: bool,
    /// Every per-file drag carries all files (`--all`).
    pub drag_all: bool,
    /// Show a single "N file(s)" affordance dragging all files (`--all-compact`).
    pub drag_all_compact: bool,
    /// Print dropped paths instead of URIs (`--print-path`).
    pub print_path: bool,
}

/// Immutable mode configuration handed to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    /// Operating mode.
    pub mode: Mode,
    /// Behavior flags.
    pub flags: ModeFlags,
    /// Raw file paths or URIs for source mode, in command-line order.
    pub files: Vec<String>,
}

impl ModeConfig {
    /// Source-mode configuration offering `files`.
    #[must_use]
    pub fn source(flags: ModeFlags, files: Vec<String>) -> Self {
        Self {
            mode: Mode::Source,
            flags,
            files,
        }
    }

    /// Target-mode configuration.
    #[must_use]
    pub fn target(flags: ModeFlags) -> Self {
        Self {
            mode: Mode::Target,
            flags,
            files: Vec::new(),
        }
    }
}
