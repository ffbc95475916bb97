#![deny(rustdoc::broken_intra_doc_links)]

//! This crate contains the nudge settings viewer: a small window which shows the nudge
//! settings REAPER keeps in its configuration and lets the user edit them via REAPER's own
//! nudge dialog.
//!
//! The viewer doesn't draw anything itself and doesn't own a run loop. The host (usually a
//! script or extension running inside REAPER) implements [`NudgeHost`], calls
//! [`ViewerSession::tick`] once per frame and draws what the session exposes.
//!
//! # Example
//!
//! ```no_run
//! # fn example(host: &impl reaper_nudge_viewer::NudgeHost) {
//! use reaper_nudge_viewer::{FrameInput, ViewerSession, ViewerSettings};
//!
//! let mut session = ViewerSession::open(host, ViewerSettings::default());
//! // Called from the host's timer callback
//! let keep_running = session.tick(host, &FrameInput::from_chars([27]));
//! assert!(!keep_running);
//! # }
//! ```

mod error;
pub use error::*;

mod log_util;
pub use log_util::*;

mod host;
pub use host::*;

mod nudge_actions;
pub use nudge_actions::*;

mod nudge_config;
pub use nudge_config::*;

mod preset_sync;
pub use preset_sync::*;

mod summary;
pub use summary::*;

mod window_geometry;
pub use window_geometry::*;

mod settings;
pub use settings::*;

mod viewer;
pub use viewer::*;

#[cfg(test)]
mod mock;
