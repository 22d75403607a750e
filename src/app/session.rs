//! The session object owning all per-process drag-and-drop state.
//!
//! One [`Session`] is built at startup from the mode configuration and passed by
//! mutable reference to [`crate::app::handle_event`]. There are no globals.
//!
//! # State Components
//!
//! - **Registry**: validated files offered in source mode (empty in target mode)
//! - **Drop target**: hover state machine, present only in target mode
//! - **Lifecycle**: exit-after-drop policy
//!
//! # Example
//!
//! ```rust
//! use phoenix::app::Session;
//! use phoenix::{ModeConfig, ModeFlags};
//! use std::path::Path;
//!
//! let session = Session::new(ModeConfig::target(ModeFlags::default()), Path::new("/"));
//! assert!(session.drop_target().is_some());
//! ```

use crate::dnd::{DropTarget, FileRegistry, LifecycleController, OutputFormat};
use crate::domain::{Mode, ModeConfig, ModeFlags};
use crate::infrastructure::content_type;
use crate::ui::style::{file_count_label, DROP_HOVER_CLASS, ROUNDED_BORDER_CLASS, TARGET_CAPTION};
use crate::ui::{Affordance, ItemView, View};
use std::path::Path;

/// Per-process drag-and-drop state.
#[derive(Debug)]
pub struct Session {
    config: ModeConfig,
    registry: FileRegistry,
    drop_target: Option<DropTarget>,
    lifecycle: LifecycleController,
}

impl Session {
    /// Builds the session for `config`, resolving source files against `cwd`.
    #[must_use]
    pub fn new(config: ModeConfig, cwd: &Path) -> Self {
        let _span = tracing::debug_span!("session_new", mode = ?config.mode).entered();

        let registry = match config.mode {
            Mode::Source => FileRegistry::build(config.files.as_slice(), cwd),
            Mode::Target => FileRegistry::default(),
        };

        let drop_target = (config.mode == Mode::Target).then(|| {
            DropTarget::new(if config.flags.print_path {
                OutputFormat::Path
            } else {
                OutputFormat::Uri
            })
        });

        let lifecycle = LifecycleController::new(config.mode, config.flags.exit_after_drop);

        tracing::debug!(files = registry.len(), "session ready");

        Self {
            config,
            registry,
            drop_target,
            lifecycle,
        }
    }

    /// Operating mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Behavior flags.
    #[must_use]
    pub const fn flags(&self) -> &ModeFlags {
        &self.config.flags
    }

    /// Files offered in source mode.
    #[must_use]
    pub const fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    /// The drop target, in target mode.
    #[must_use]
    pub const fn drop_target(&self) -> Option<&DropTarget> {
        self.drop_target.as_ref()
    }

    pub(crate) fn drop_target_mut(&mut self) -> Option<&mut DropTarget> {
        self.drop_target.as_mut()
    }

    pub(crate) fn lifecycle_mut(&mut self) -> &mut LifecycleController {
        &mut self.lifecycle
    }

    /// Computes the view model for the current state.
    #[must_use]
    pub fn view(&self) -> View {
        match self.config.mode {
            Mode::Source if self.config.flags.drag_all_compact => View::SourceCompact {
                affordance: Affordance {
                    label: file_count_label(self.registry.len()),
                    css_classes: vec![ROUNDED_BORDER_CLASS.to_string()],
                },
            },
            Mode::Source => View::SourceList {
                items: self
                    .registry
                    .files()
                    .iter()
                    .enumerate()
                    .map(|(index, file)| ItemView {
                        index,
                        label: file.label().to_string(),
                        content_type: file.content_type().to_string(),
                        icon_name: content_type::icon_name(file.content_type()),
                        fallback_icon_name: content_type::generic_icon_name(file.content_type()),
                    })
                    .collect(),
            },
            Mode::Target => {
                let mut css_classes = vec![ROUNDED_BORDER_CLASS.to_string()];
                if self.drop_target.as_ref().is_some_and(DropTarget::is_hovering) {
                    css_classes.push(DROP_HOVER_CLASS.to_string());
                }
                View::Target {
                    affordance: Affordance {
                        label: TARGET_CAPTION.to_string(),
                        css_classes,
                    },
                }
            }
        }
    }
}
