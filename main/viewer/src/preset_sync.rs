use crate::{read_nudge_preset, NudgeActions, NudgeHost};
use reaper_nudge_codec::{NudgePreset, SlotIndex};
use tracing::{debug, info, warn};

/// State of the (single, shared) REAPER nudge dialog from the viewer's point of view.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum PresetSyncState {
    #[default]
    Idle,
    /// The nudge dialog has been opened in order to edit the given slot.
    Editing { slot: SlotIndex },
}

/// Keeps a slot in sync with edits done in REAPER's nudge dialog.
///
/// The nudge dialog only ever edits the last used settings. Editing a saved slot therefore
/// means: copy the slot into the last used settings, open the dialog, and as soon as it's closed
/// save the last used settings back into the slot.
#[derive(Debug)]
pub struct PresetSyncTracker {
    actions: NudgeActions,
    state: PresetSyncState,
}

impl PresetSyncTracker {
    pub fn new(actions: NudgeActions) -> Self {
        Self {
            actions,
            state: PresetSyncState::Idle,
        }
    }

    pub fn state(&self) -> PresetSyncState {
        self.state
    }

    /// Returns the slot being edited, if any.
    pub fn editing_slot(&self) -> Option<SlotIndex> {
        match self.state {
            PresetSyncState::Idle => None,
            PresetSyncState::Editing { slot } => Some(slot),
        }
    }

    /// Opens the nudge dialog for editing the given slot.
    ///
    /// Does nothing and returns `false` if an edit is already in progress.
    pub fn request_edit(&mut self, host: &impl NudgeHost, slot: SlotIndex) -> bool {
        if let PresetSyncState::Editing { slot: current } = self.state {
            debug!(%current, requested = %slot, "Already editing, ignoring edit request");
            return false;
        }
        if !slot.is_last() {
            self.load_into_last(host, slot);
        }
        host.main_on_command(self.actions.open_editor);
        self.state = PresetSyncState::Editing { slot };
        info!(%slot, "Editing nudge settings");
        true
    }

    /// Checks whether the nudge dialog has been closed in the meantime.
    ///
    /// When it has, saves the edited settings into the slot being edited and returns them
    /// freshly decoded.
    pub fn poll(&mut self, host: &impl NudgeHost) -> Option<NudgePreset> {
        let PresetSyncState::Editing { slot } = self.state else {
            return None;
        };
        let editor_is_open = host
            .get_toggle_command_state(self.actions.open_editor)
            .unwrap_or(false);
        if editor_is_open {
            return None;
        }
        self.state = PresetSyncState::Idle;
        if let Some(save_action) = self.actions.save_to(slot) {
            host.main_on_command(save_action);
        }
        info!(%slot, "Nudge dialog closed, saved nudge settings");
        Some(read_nudge_preset(host, slot))
    }

    /// Makes the given saved slot the last used one.
    ///
    /// REAPER does that whenever one of the slot's nudge actions runs. Running it with an empty
    /// item selection has no effect on the project, so the selection is cleared and restored
    /// around it.
    fn load_into_last(&self, host: &impl NudgeHost, slot: SlotIndex) {
        let selection = host.selected_items();
        host.select_all_items(false);
        match self.actions.nudge_right(slot) {
            Some(command_id) => host.main_on_command(command_id),
            None => warn!(%slot, "No nudge action for slot, can't make it the last used one"),
        }
        for item in selection {
            host.set_item_selected(item, true);
        }
    }
}
