use crate::{NudgeFlag, NudgeMode, NudgeTarget, NudgeUnit, SlotIndex};
use enumflags2::BitFlags;
use std::fmt::{Display, Formatter};

const UNIT_SHIFT: u32 = 4;
const UNIT_MASK: u32 = 0xff;
const TARGET_SHIFT: u32 = 12;
const TARGET_MASK: u32 = 0xf;

/// Amount of a nudge preset.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum NudgeAmount {
    /// The amount by which to nudge.
    Value(f64),
    /// REAPER doesn't save the value of "set" presets, so there's nothing to show.
    NotApplicable,
}

impl NudgeAmount {
    pub fn value(self) -> Option<f64> {
        match self {
            NudgeAmount::Value(v) => Some(v),
            NudgeAmount::NotApplicable => None,
        }
    }
}

impl Display for NudgeAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NudgeAmount::Value(v) => write!(f, "{}", v),
            NudgeAmount::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// The nudge settings stored in one slot, decoded from REAPER's configuration.
///
/// A preset is never modified. Decode the slot again in order to get the current settings.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct NudgePreset {
    slot: SlotIndex,
    mode: NudgeMode,
    target: NudgeTarget,
    unit: NudgeUnit,
    snap_to_grid: bool,
    relative: bool,
    amount: NudgeAmount,
}

/// A preset converted back into the representation found in REAPER's configuration.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EncodedNudgePreset {
    pub config_word: u32,
    /// `None` for "set" presets because REAPER doesn't save an amount for them.
    pub amount: Option<f64>,
}

impl NudgePreset {
    /// Decodes the packed configuration word of the given slot.
    ///
    /// The amount is only taken into account in nudge mode. Unknown target and unit codes are
    /// preserved in `Unknown` variants, so this never fails. The target is a 4-bit field at
    /// bits 12 to 15; bits 16 and above are ignored and therefore not written by [`encode`].
    ///
    /// [`encode`]: Self::encode
    pub fn decode(slot: SlotIndex, config_word: u32, amount: f64) -> NudgePreset {
        let flags = BitFlags::<NudgeFlag>::from_bits_truncate(config_word);
        let mode = if flags.contains(NudgeFlag::Set) {
            NudgeMode::Set
        } else {
            NudgeMode::Nudge
        };
        let unit_code = ((config_word >> UNIT_SHIFT) & UNIT_MASK) as u8;
        let target_code = ((config_word >> TARGET_SHIFT) & TARGET_MASK) as u8;
        NudgePreset {
            slot,
            mode,
            target: NudgeTarget::from_raw(target_code),
            unit: NudgeUnit::from_raw(unit_code),
            snap_to_grid: flags.contains(NudgeFlag::SnapToGrid),
            relative: flags.contains(NudgeFlag::Relative),
            amount: match mode {
                NudgeMode::Nudge => NudgeAmount::Value(amount),
                NudgeMode::Set => NudgeAmount::NotApplicable,
            },
        }
    }

    /// Packs this preset into a configuration word (plus amount).
    ///
    /// Bits which are not covered by the decoded fields end up as 0.
    pub fn encode(&self) -> EncodedNudgePreset {
        let mut flags = BitFlags::<NudgeFlag>::empty();
        if self.mode == NudgeMode::Set {
            flags |= NudgeFlag::Set;
        }
        if self.snap_to_grid {
            flags |= NudgeFlag::SnapToGrid;
        }
        if self.relative {
            flags |= NudgeFlag::Relative;
        }
        let config_word = flags.bits()
            | ((self.unit.to_raw() as u32) << UNIT_SHIFT)
            | (((self.target.to_raw() as u32) & TARGET_MASK) << TARGET_SHIFT);
        EncodedNudgePreset {
            config_word,
            amount: self.amount.value(),
        }
    }

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    pub fn mode(&self) -> NudgeMode {
        self.mode
    }

    pub fn target(&self) -> NudgeTarget {
        self.target
    }

    pub fn unit(&self) -> NudgeUnit {
        self.unit
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// Returns the raw relative flag, no matter if it has any effect.
    ///
    /// See [`relative_is_applicable`](Self::relative_is_applicable).
    pub fn relative(&self) -> bool {
        self.relative
    }

    /// Returns whether the relative flag has an effect with the current mode and target.
    pub fn relative_is_applicable(&self) -> bool {
        self.mode == NudgeMode::Set && self.target.supports_relative_set()
    }

    pub fn amount(&self) -> NudgeAmount {
        self.amount
    }
}
