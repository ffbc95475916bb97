use reaper_nudge_codec::{ActionGroup, CommandId, SlotIndex};
use serde::{Deserialize, Serialize};

/// Command IDs of REAPER's built-in nudge actions.
///
/// For the banks, the IDs refer to the action of the first slot in the bank. The actions of the
/// other slots directly follow.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NudgeActions {
    /// "Item edit: Nudge/set items..." (toggles the nudge dialog)
    pub open_editor: CommandId,
    pub last: LastNudgeActions,
    pub bank_1: BankNudgeActions,
    pub bank_2: BankNudgeActions,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct LastNudgeActions {
    pub nudge_left: CommandId,
    pub nudge_right: CommandId,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBankNudgeActions")]
pub struct BankNudgeActions {
    pub nudge_left: CommandId,
    pub nudge_right: CommandId,
    /// "Save last nudge dialog settings to ..."
    pub save: CommandId,
}

#[derive(Deserialize)]
struct UncheckedBankNudgeActions {
    nudge_left: CommandId,
    nudge_right: CommandId,
    save: CommandId,
}

impl TryFrom<UncheckedBankNudgeActions> for BankNudgeActions {
    type Error = &'static str;

    fn try_from(value: UncheckedBankNudgeActions) -> Result<Self, Self::Error> {
        let last_offset = SlotIndex::BANK_SIZE - 1;
        let bases = [value.nudge_left, value.nudge_right, value.save];
        if bases.iter().any(|base| base.offset_by(last_offset).is_none()) {
            return Err("bank command IDs leave no room for the actions of all four slots");
        }
        Ok(BankNudgeActions {
            nudge_left: value.nudge_left,
            nudge_right: value.nudge_right,
            save: value.save,
        })
    }
}

impl Default for NudgeActions {
    fn default() -> Self {
        Self {
            open_editor: CommandId::new(41228),
            last: LastNudgeActions {
                nudge_left: CommandId::new(41250),
                nudge_right: CommandId::new(41249),
            },
            bank_1: BankNudgeActions {
                nudge_left: CommandId::new(41279),
                nudge_right: CommandId::new(41275),
                save: CommandId::new(41271),
            },
            bank_2: BankNudgeActions {
                nudge_left: CommandId::new(41291),
                nudge_right: CommandId::new(41287),
                save: CommandId::new(41283),
            },
        }
    }
}

impl NudgeActions {
    /// Returns `None` if the bank's command IDs don't cover the given slot.
    pub fn nudge_left(&self, slot: SlotIndex) -> Option<CommandId> {
        let action_slot = slot.action_slot();
        match self.bank(action_slot.group) {
            None => Some(self.last.nudge_left),
            Some(bank) => bank.nudge_left.offset_by(action_slot.offset),
        }
    }

    /// Returns `None` if the bank's command IDs don't cover the given slot.
    pub fn nudge_right(&self, slot: SlotIndex) -> Option<CommandId> {
        let action_slot = slot.action_slot();
        match self.bank(action_slot.group) {
            None => Some(self.last.nudge_right),
            Some(bank) => bank.nudge_right.offset_by(action_slot.offset),
        }
    }

    /// Returns the action which saves the last used settings into the given slot.
    ///
    /// Returns `None` for the last used slot itself.
    pub fn save_to(&self, slot: SlotIndex) -> Option<CommandId> {
        let action_slot = slot.action_slot();
        let bank = self.bank(action_slot.group)?;
        bank.save.offset_by(action_slot.offset)
    }

    fn bank(&self, group: ActionGroup) -> Option<&BankNudgeActions> {
        match group {
            ActionGroup::Last => None,
            ActionGroup::Bank1 => Some(&self.bank_1),
            ActionGroup::Bank2 => Some(&self.bank_2),
        }
    }
}
