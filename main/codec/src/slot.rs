use crate::TryFromGreaterError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Index of one of the nine nudge settings slots.
///
/// Slot 0 holds the last used nudge settings. Slots 1 to 8 hold the saved nudge settings.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8")
)]
pub struct SlotIndex(pub(crate) u8);

impl SlotIndex {
    /// The slot holding the last used nudge settings.
    pub const LAST: SlotIndex = SlotIndex(0);

    /// The highest slot index.
    pub const MAX: SlotIndex = SlotIndex(8);

    /// Number of slots within one bank.
    pub const BANK_SIZE: u8 = 4;

    fn is_valid(value: u8) -> bool {
        value <= Self::MAX.0
    }

    /// Creates a slot index.
    ///
    /// # Panics
    ///
    /// This function panics if the given value is greater than 8.
    pub fn new(value: u8) -> SlotIndex {
        assert!(Self::is_valid(value), "slot index must be within 0..=8");
        SlotIndex(value)
    }

    /// Returns the wrapped value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns whether this is the slot holding the last used nudge settings.
    pub const fn is_last(self) -> bool {
        self.0 == 0
    }

    /// Iterates over all slots, starting with the last used one.
    pub fn all() -> impl Iterator<Item = SlotIndex> + ExactSizeIterator {
        (0..=Self::MAX.0).map(SlotIndex)
    }

    /// Returns the following slot, wrapping around after slot 8.
    pub fn next(self) -> SlotIndex {
        SlotIndex((self.0 + 1) % (Self::MAX.0 + 1))
    }

    /// Returns the preceding slot, wrapping around before slot 0.
    pub fn previous(self) -> SlotIndex {
        SlotIndex((self.0 + Self::MAX.0) % (Self::MAX.0 + 1))
    }

    /// Returns the suffix which REAPER appends to configuration keys of this slot.
    ///
    /// The last used settings don't have any suffix.
    pub fn config_suffix(self) -> String {
        if self.is_last() {
            String::new()
        } else {
            self.0.to_string()
        }
    }

    /// Returns the name of the configuration key holding the packed nudge settings of this slot.
    pub fn config_key(self) -> String {
        format!("nudge{}", self.config_suffix())
    }

    /// Returns the name of the configuration key holding the nudge amount of this slot.
    pub fn amount_config_key(self) -> String {
        format!("nudgeamt{}", self.config_suffix())
    }

    /// Returns the group of REAPER actions which operate on this slot.
    pub fn action_slot(self) -> ActionSlot {
        match self.0 {
            0 => ActionSlot {
                group: ActionGroup::Last,
                offset: 0,
            },
            n @ 1..=4 => ActionSlot {
                group: ActionGroup::Bank1,
                offset: n - 1,
            },
            n => ActionSlot {
                group: ActionGroup::Bank2,
                offset: (n - 1) % Self::BANK_SIZE,
            },
        }
    }
}

impl Display for SlotIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_last() {
            f.write_str("Last")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl TryFrom<u8> for SlotIndex {
    type Error = TryFromGreaterError<u8>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !Self::is_valid(value) {
            return Err(TryFromGreaterError::new(
                "slot index must be within 0..=8",
                value,
            ));
        }
        Ok(SlotIndex(value))
    }
}

impl From<SlotIndex> for u8 {
    fn from(v: SlotIndex) -> Self {
        v.0
    }
}

/// REAPER groups its nudge actions. The last used settings have their own actions, the saved
/// settings are split into two banks of four.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ActionGroup {
    /// Actions operating on the last used nudge settings.
    Last,
    /// Actions operating on saved nudge settings 1 to 4.
    Bank1,
    /// Actions operating on saved nudge settings 5 to 8.
    Bank2,
}

/// Position of a slot within its action group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ActionSlot {
    pub group: ActionGroup,
    /// Offset of the slot's action relative to the first action of the group.
    pub offset: u8,
}
