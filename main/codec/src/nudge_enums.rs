use crate::Hidden;
use enumflags2::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Single-bit flags of a nudge configuration word.
#[bitflags]
#[repr(u32)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NudgeFlag {
    /// Set instead of nudge.
    Set = 1 << 0,
    SnapToGrid = 1 << 1,
    /// Set relative to the current value. Only meaningful in combination with [`Set`].
    ///
    /// [`Set`]: NudgeFlag::Set
    Relative = 1 << 2,
}

/// Whether a preset moves things by an amount or to an absolute value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NudgeMode {
    /// Shifts the target by the nudge amount.
    Nudge,
    /// Moves the target to an absolute value.
    Set,
}

impl NudgeMode {
    pub fn label(self) -> &'static str {
        use NudgeMode::*;
        match self {
            Nudge => "Nudge",
            Set => "Set",
        }
    }
}

impl Display for NudgeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a nudge preset acts on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NudgeTarget {
    Position,
    LeftTrim,
    LeftEdge,
    RightTrim,
    Contents,
    Duplicate,
    EditCursor,
    EndPosition,
    /// Represents a target introduced by a REAPER version which is unknown to this crate.
    Unknown(Hidden<u8>),
}

impl NudgeTarget {
    /// Converts the 4-bit target field of a configuration word to a target.
    pub fn from_raw(value: u8) -> NudgeTarget {
        use NudgeTarget::*;
        match value {
            0 => Position,
            1 => LeftTrim,
            2 => LeftEdge,
            3 => RightTrim,
            4 => Contents,
            5 => Duplicate,
            6 => EditCursor,
            7 => EndPosition,
            x => Unknown(Hidden(x)),
        }
    }

    /// Converts this value to the 4-bit target field of a configuration word.
    pub fn to_raw(self) -> u8 {
        use NudgeTarget::*;
        match self {
            Position => 0,
            LeftTrim => 1,
            LeftEdge => 2,
            RightTrim => 3,
            Contents => 4,
            Duplicate => 5,
            EditCursor => 6,
            EndPosition => 7,
            Unknown(Hidden(x)) => x,
        }
    }

    /// Returns whether the relative flag has any effect on this target when setting.
    pub fn supports_relative_set(self) -> bool {
        use NudgeTarget::*;
        matches!(self, Position | Duplicate | EndPosition)
    }

    pub fn label(self) -> Cow<'static, str> {
        use NudgeTarget::*;
        let label = match self {
            Position => "position",
            LeftTrim => "left trim",
            LeftEdge => "left edge",
            RightTrim => "right trim",
            Contents => "contents",
            Duplicate => "duplicate",
            EditCursor => "edit cursor",
            EndPosition => "end position",
            Unknown(Hidden(x)) => return unknown_label(x).into(),
        };
        label.into()
    }
}

impl Display for NudgeTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Note length used by the "notes" nudge unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum NoteValue {
    TwoHundredFiftySixth = 0,
    HundredTwentyEighth = 1,
    SixtyFourth = 2,
    ThirtySecondTriplet = 3,
    ThirtySecond = 4,
    SixteenthTriplet = 5,
    Sixteenth = 6,
    EighthTriplet = 7,
    Eighth = 8,
    QuarterTriplet = 9,
    Quarter = 10,
    Half = 11,
    Whole = 12,
}

impl NoteValue {
    pub fn label(self) -> &'static str {
        use NoteValue::*;
        match self {
            TwoHundredFiftySixth => "1/256",
            HundredTwentyEighth => "1/128",
            SixtyFourth => "1/64",
            ThirtySecondTriplet => "1/32T",
            ThirtySecond => "1/32",
            SixteenthTriplet => "1/16T",
            Sixteenth => "1/16",
            EighthTriplet => "1/8T",
            Eighth => "1/8",
            QuarterTriplet => "1/4T",
            Quarter => "1/4",
            Half => "1/2",
            Whole => "whole",
        }
    }
}

impl Display for NoteValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of the nudge amount.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NudgeUnit {
    Milliseconds,
    Seconds,
    GridUnits,
    Notes(NoteValue),
    MeasuresBeats,
    Samples,
    Frames,
    Pixels,
    ItemLengths,
    ItemSelections,
    /// Represents a unit introduced by a REAPER version which is unknown to this crate.
    Unknown(Hidden<u8>),
}

/// Raw unit values from this one up to [`LAST_NOTE_UNIT`] encode note lengths.
const FIRST_NOTE_UNIT: u8 = 4;
const LAST_NOTE_UNIT: u8 = 16;

impl NudgeUnit {
    /// Converts the 8-bit unit field of a configuration word to a unit.
    pub fn from_raw(value: u8) -> NudgeUnit {
        use NudgeUnit::*;
        match value {
            0 => Milliseconds,
            1 => Seconds,
            2 => GridUnits,
            FIRST_NOTE_UNIT..=LAST_NOTE_UNIT => {
                match NoteValue::try_from(value - FIRST_NOTE_UNIT) {
                    Ok(note_value) => Notes(note_value),
                    Err(_) => Unknown(Hidden(value)),
                }
            }
            17 => MeasuresBeats,
            18 => Samples,
            19 => Frames,
            20 => Pixels,
            21 => ItemLengths,
            22 => ItemSelections,
            x => Unknown(Hidden(x)),
        }
    }

    /// Converts this value to the 8-bit unit field of a configuration word.
    pub fn to_raw(self) -> u8 {
        use NudgeUnit::*;
        match self {
            Milliseconds => 0,
            Seconds => 1,
            GridUnits => 2,
            Notes(note_value) => FIRST_NOTE_UNIT + u8::from(note_value),
            MeasuresBeats => 17,
            Samples => 18,
            Frames => 19,
            Pixels => 20,
            ItemLengths => 21,
            ItemSelections => 22,
            Unknown(Hidden(x)) => x,
        }
    }

    /// Returns the note length if this is the "notes" unit.
    pub fn note_value(self) -> Option<NoteValue> {
        match self {
            NudgeUnit::Notes(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the name of the unit without the note length.
    pub fn label(self) -> Cow<'static, str> {
        use NudgeUnit::*;
        let label = match self {
            Milliseconds => "milliseconds",
            Seconds => "seconds",
            GridUnits => "grid units",
            Notes(_) => "notes",
            MeasuresBeats => "measures.beats",
            Samples => "samples",
            Frames => "frames",
            Pixels => "pixels",
            ItemLengths => "item lengths",
            ItemSelections => "item selections",
            Unknown(Hidden(x)) => return unknown_label(x).into(),
        };
        label.into()
    }
}

impl Display for NudgeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NudgeUnit::Notes(v) => write!(f, "{} notes", v),
            _ => f.write_str(&self.label()),
        }
    }
}

fn unknown_label(value: u8) -> String {
    format!("{} (Unknown)", value)
}
