//! This module defines various newtypes in order to achieve more type safety.
use crate::TryFromGreaterError;
use derive_more::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A command ID.
///
/// This uniquely identifies a REAPER action within the main section. All nudge related actions
/// are built-in actions, so their command IDs are completely stable.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u32")
)]
pub struct CommandId(pub(crate) u32);

impl CommandId {
    /// The highest command ID. REAPER passes command IDs around as C `int`.
    pub const MAX: CommandId = CommandId(i32::MAX as u32);

    fn is_valid(value: u32) -> bool {
        value != 0 && value <= Self::MAX.0
    }

    /// Creates a command ID.
    ///
    /// # Panics
    ///
    /// This function panics if the given value is 0 or doesn't fit into an `i32`.
    pub fn new(value: u32) -> CommandId {
        assert!(Self::is_valid(value), "{}", INVALID_COMMAND_ID_MESSAGE);
        CommandId(value)
    }

    /// Returns the wrapped value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the command ID which is located `offset` positions after this one.
    ///
    /// REAPER numbers the actions of one nudge bank consecutively, so this is how the action of
    /// a particular slot within a bank is found.
    ///
    /// Returns `None` if the result isn't a valid command ID anymore.
    pub fn offset_by(self, offset: u8) -> Option<CommandId> {
        let value = self.0.checked_add(offset as u32)?;
        Self::is_valid(value).then_some(CommandId(value))
    }

    /// Converts this value to an integer as expected by the low-level API.
    pub fn to_raw(self) -> i32 {
        self.0 as i32
    }
}

impl TryFrom<u32> for CommandId {
    type Error = TryFromGreaterError<u32>;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if !Self::is_valid(value) {
            return Err(TryFromGreaterError::new(INVALID_COMMAND_ID_MESSAGE, value));
        }
        Ok(CommandId(value))
    }
}

const INVALID_COMMAND_ID_MESSAGE: &str = "command ID must be within 1..=2147483647";

/// Represents a value which can neither be accessed nor created by the consumer.
///
/// It's mainly used inside `Unknown` variants in order to enable forward compatibility without
/// information loss.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Hidden<T>(pub(crate) T);
