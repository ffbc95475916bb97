#![deny(rustdoc::broken_intra_doc_links)]

//! This crate contains the part of the nudge settings viewer that doesn't need REAPER at all:
//! decoding and encoding of the packed nudge configuration words which REAPER writes to its
//! `REAPER.ini` file.
//!
//! # Example
//!
//! ```
//! use reaper_nudge_codec::{NudgePreset, NudgeTarget, NudgeUnit, NoteValue, SlotIndex};
//!
//! // Nudge, snap to grid, unit 1/16 notes, target "right trim"
//! let preset = NudgePreset::decode(SlotIndex::new(3), 0x3_0A2, 2.0);
//! assert_eq!(preset.target(), NudgeTarget::RightTrim);
//! assert_eq!(preset.unit(), NudgeUnit::Notes(NoteValue::Sixteenth));
//! assert!(preset.snap_to_grid());
//! ```
//!
//! # General usage hints
//!
//! - Slot 0 is the *last used* nudge settings, slots 1 to 8 are the saved nudge settings which
//!   can be recalled via REAPER's "nudge by saved settings" actions.
//! - Decoding never fails. Codes which are unknown to this crate end up in `Unknown` variants
//!   and are written back verbatim when encoding.

mod errors;
pub use errors::*;

mod misc_newtypes;
pub use misc_newtypes::*;

mod slot;
pub use slot::*;

mod nudge_enums;
pub use nudge_enums::*;

mod nudge_preset;
pub use nudge_preset::*;
