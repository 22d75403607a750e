//! Phoenix: a lightweight drag-and-drop source and target.
//!
//! Phoenix sits between the desktop and the terminal:
//! - **Source mode** offers files given on the command line as drag sources
//! - **Target mode** offers a drop zone and prints whatever is dropped on it,
//!   one URI (or path) per line, to stdout
//!
//! The crate is toolkit-agnostic. A host UI process owns the window and
//! forwards gesture callbacks; the core decides what to offer, what to accept
//! and what to print.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary shim (main.rs)                              │  ← CLI, config, logging
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Host bridge (bridge/)                              │  ← JSON lines on stdin
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Session ownership                                │
//! │  - Event handling and action dispatching            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ DnD core      │   │ UI Layer      │   │ Observability │
//! │ (dnd/)        │   │ (ui/)         │   │ (observ…/)    │
//! │ - Registry    │   │ - View model  │   │ - tracing     │
//! │ - Payloads    │   │ - Stylesheet  │   │ - Log files   │
//! │ - Drop target │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths and content types (infrastructure/)        │
//! │  - Errors, modes, file references (domain/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session and event/action model
//! - [`bridge`]: JSON-lines protocol with the host UI process
//! - [`cli`]: Command-line surface
//! - [`config`]: Config file and merged startup configuration
//! - [`dnd`]: Registry, payload builder, drop target, lifecycle
//! - [`domain`]: Core types and errors
//! - [`infrastructure`]: Path and content-type helpers
//! - [`observability`]: Logging setup
//! - [`ui`]: View model and stylesheet
//!
//! # Examples
//!
//! ```rust
//! use phoenix::{handle_event, Action, Event, ModeConfig, ModeFlags, Session};
//! use std::path::Path;
//!
//! let flags = ModeFlags { print_path: true, ..ModeFlags::default() };
//! let mut session = Session::new(ModeConfig::target(flags), Path::new("/"));
//!
//! handle_event(&mut session, &Event::DropEnter { formats: vec!["text/uri-list".into()] })?;
//! let drop = Event::Drop {
//!     data: phoenix::dnd::DropData::Uris(vec!["file:///tmp/notes.txt".into()]),
//! };
//! let (_, actions) = handle_event(&mut session, &drop)?;
//! assert_eq!(actions[0], Action::Emit { lines: vec!["/tmp/notes.txt".into()] });
//! # Ok::<(), phoenix::PhoenixError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit Callback Boundary
//!
//! The core never touches a widget. It exposes `build_payload`, `on_enter`,
//! `on_leave` and `on_drop`, and `handle_event` over them, so any toolkit (or
//! a test) can drive it.
//!
//! ## No Globals
//!
//! All mutable state lives in one [`Session`] created at startup and passed by
//! mutable reference.
//!
//! ## Stdout Is Output
//!
//! In target mode stdout carries only drop lines; everything else is logged
//! to stderr or to the log file.

pub mod app;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod dnd;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, Event, Session};
pub use config::Config;
pub use domain::{FileReference, Mode, ModeConfig, ModeFlags, PhoenixError, Result};
