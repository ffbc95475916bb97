use crate::{
    describe, read_nudge_preset, summary_rows, MessageBoxType, NudgeHost, PresetSyncTracker,
    SummaryRow, ViewerSettings, WindowGeometry, LAST_SLOT_CAVEAT,
};
use reaper_nudge_codec::{CommandId, NudgePreset, SlotIndex};
use tracing::{debug, info, warn};

/// Character codes as delivered by REAPER's `gfx.getchar()`.
mod char_code {
    pub const WINDOW_CLOSED: i32 = -1;
    pub const ENTER: i32 = 13;
    pub const ESCAPE: i32 = 27;
    pub const UP: i32 = 30064;
    pub const DOWN: i32 = 1685026670;
    pub const LEFT: i32 = 1818584692;
    pub const RIGHT: i32 = 1919379572;
    pub const F1: i32 = 26161;
}

/// Something the user wants the viewer to do.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ViewerEvent {
    SelectSlot(SlotIndex),
    PreviousSlot,
    NextSlot,
    /// Opens REAPER's nudge dialog for the current slot.
    Edit,
    NudgeLeft,
    NudgeRight,
    /// Decodes the current slot again.
    Reload,
    /// Shows information about this package.
    About,
    Close,
}

impl ViewerEvent {
    /// Translates a character code as returned by `gfx.getchar()` into an event.
    pub fn from_char(code: i32) -> Option<ViewerEvent> {
        use ViewerEvent::*;
        let event = match code {
            char_code::WINDOW_CLOSED | char_code::ESCAPE => Close,
            char_code::ENTER => Edit,
            char_code::UP => PreviousSlot,
            char_code::DOWN => NextSlot,
            char_code::LEFT => NudgeLeft,
            char_code::RIGHT => NudgeRight,
            char_code::F1 => About,
            c => match u8::try_from(c).ok().map(char::from)? {
                'e' => Edit,
                'r' => Reload,
                '?' => About,
                digit @ '0'..='8' => SelectSlot(SlotIndex::new(digit as u8 - b'0')),
                _ => return None,
            },
        };
        Some(event)
    }
}

/// Everything the host collected since the previous tick.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct FrameInput {
    pub events: Vec<ViewerEvent>,
    /// Current window geometry, if the window still exists.
    pub geometry: Option<WindowGeometry>,
}

impl FrameInput {
    /// Creates input from raw `gfx.getchar()` codes, ignoring codes without meaning.
    pub fn from_chars(chars: impl IntoIterator<Item = i32>) -> Self {
        Self {
            events: chars.into_iter().filter_map(ViewerEvent::from_char).collect(),
            geometry: None,
        }
    }

    pub fn with_geometry(mut self, geometry: WindowGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }
}

/// State of one open viewer window.
#[derive(Debug)]
pub struct ViewerSession {
    settings: ViewerSettings,
    tracker: PresetSyncTracker,
    preset: NudgePreset,
    geometry: WindowGeometry,
}

impl ViewerSession {
    /// Restores the window geometry and shows the last used nudge settings.
    pub fn open(host: &impl NudgeHost, settings: ViewerSettings) -> ViewerSession {
        let geometry = restore_geometry(host, &settings);
        info!(%geometry, "Opening nudge settings viewer");
        ViewerSession {
            tracker: PresetSyncTracker::new(settings.actions),
            preset: read_nudge_preset(host, SlotIndex::LAST),
            geometry,
            settings,
        }
    }

    pub fn slot(&self) -> SlotIndex {
        self.preset.slot()
    }

    pub fn preset(&self) -> &NudgePreset {
        &self.preset
    }

    /// The window geometry to open the window with, or the one seen last.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn tracker(&self) -> &PresetSyncTracker {
        &self.tracker
    }

    pub fn is_editing(&self) -> bool {
        self.tracker.editing_slot().is_some()
    }

    pub fn summary(&self) -> Vec<SummaryRow> {
        summary_rows(&self.preset)
    }

    pub fn description(&self) -> String {
        describe(&self.preset)
    }

    /// Returns a hint to be shown along with the current slot, if any.
    pub fn caveat(&self) -> Option<&'static str> {
        if self.slot().is_last() {
            Some(LAST_SLOT_CAVEAT)
        } else {
            None
        }
    }

    /// Processes one frame worth of input and picks up changes done in REAPER's nudge dialog.
    ///
    /// Returns `false` as soon as the viewer is closed. The host shouldn't call this anymore
    /// then.
    pub fn tick(&mut self, host: &impl NudgeHost, input: &FrameInput) -> bool {
        if let Some(geometry) = input.geometry {
            self.geometry = geometry;
        }
        for event in &input.events {
            if !self.handle_event(host, *event) {
                self.close(host);
                return false;
            }
        }
        if let Some(preset) = self.tracker.poll(host) {
            if preset.slot() == self.slot() {
                self.preset = preset;
            } else {
                debug!(edited = %preset.slot(), shown = %self.slot(), "Edited slot not shown");
            }
        }
        true
    }

    fn handle_event(&mut self, host: &impl NudgeHost, event: ViewerEvent) -> bool {
        use ViewerEvent::*;
        debug!(?event, "Handling viewer event");
        let current = self.slot();
        match event {
            SelectSlot(slot) => self.show_slot(host, slot),
            PreviousSlot => self.show_slot(host, current.previous()),
            NextSlot => self.show_slot(host, current.next()),
            Edit => {
                self.tracker.request_edit(host, current);
            }
            NudgeLeft => self.run_action(host, self.settings.actions.nudge_left(current)),
            NudgeRight => self.run_action(host, self.settings.actions.nudge_right(current)),
            Reload => self.show_slot(host, current),
            About => self.about(host),
            Close => return false,
        }
        true
    }

    fn run_action(&self, host: &impl NudgeHost, command_id: Option<CommandId>) {
        match command_id {
            Some(id) => host.main_on_command(id),
            None => warn!(slot = %self.slot(), "No nudge action for slot"),
        }
    }

    fn show_slot(&mut self, host: &impl NudgeHost, slot: SlotIndex) {
        self.preset = read_nudge_preset(host, slot);
    }

    fn about(&self, host: &impl NudgeHost) {
        if host.package_manager_is_available() {
            host.show_package_about(&self.settings.package_name);
        } else {
            host.show_message_box(
                "The package manager extension (ReaPack) is required to show information about \
                 this package. Please install it from https://reapack.com.",
                &self.settings.package_name,
                MessageBoxType::Ok,
            );
        }
    }

    fn close(&self, host: &impl NudgeHost) {
        info!(geometry = %self.geometry, "Closing nudge settings viewer");
        host.set_ext_state(
            &self.settings.ext_state_section,
            &self.settings.geometry_key,
            &self.geometry.to_string(),
            true,
        );
    }
}

fn restore_geometry(host: &impl NudgeHost, settings: &ViewerSettings) -> WindowGeometry {
    let Some(value) = host.get_ext_state(&settings.ext_state_section, &settings.geometry_key)
    else {
        return settings.default_geometry;
    };
    match value.parse() {
        Ok(g) => g,
        Err(e) => {
            warn!(%value, error = %e, "Ignoring persisted window geometry");
            settings.default_geometry
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{HostCall, MockHost};
    use reaper_nudge_codec::{NudgeMode, NudgeTarget};

    fn open(host: &MockHost) -> ViewerSession {
        let session = ViewerSession::open(host, ViewerSettings::default());
        host.make_toggle(session.settings.actions.open_editor);
        session
    }

    fn events(events: &[ViewerEvent]) -> FrameInput {
        FrameInput {
            events: events.to_vec(),
            geometry: None,
        }
    }

    #[test]
    fn key_mapping() {
        assert_eq!(
            ViewerEvent::from_char('3' as i32),
            Some(ViewerEvent::SelectSlot(SlotIndex::new(3)))
        );
        assert_eq!(ViewerEvent::from_char('9' as i32), None);
        assert_eq!(ViewerEvent::from_char(-1), Some(ViewerEvent::Close));
        assert_eq!(ViewerEvent::from_char(27), Some(ViewerEvent::Close));
        assert_eq!(ViewerEvent::from_char(1919379572), Some(ViewerEvent::NudgeRight));
        assert_eq!(ViewerEvent::from_char(0), None);
        assert_eq!(ViewerEvent::from_char(100_000), None);
        let input = FrameInput::from_chars(['e' as i32, 'x' as i32, 30064]);
        assert_eq!(input.events, vec![ViewerEvent::Edit, ViewerEvent::PreviousSlot]);
    }

    #[test]
    fn opens_on_last_slot_with_caveat() {
        let host = MockHost::new();
        host.set_config("nudge", "1");
        let session = open(&host);
        assert_eq!(session.slot(), SlotIndex::LAST);
        assert_eq!(session.preset().mode(), NudgeMode::Set);
        assert_eq!(session.caveat(), Some(LAST_SLOT_CAVEAT));
        assert_eq!(session.geometry(), WindowGeometry::default());
    }

    #[test]
    fn navigate_slots() {
        let host = MockHost::new();
        host.set_config("nudge8", "4096");
        let mut session = open(&host);
        assert!(session.tick(&host, &events(&[ViewerEvent::PreviousSlot])));
        assert_eq!(session.slot(), SlotIndex::new(8));
        assert_eq!(session.preset().target(), NudgeTarget::LeftTrim);
        assert_eq!(session.caveat(), None);
        session.tick(&host, &events(&[ViewerEvent::NextSlot, ViewerEvent::NextSlot]));
        assert_eq!(session.slot(), SlotIndex::new(1));
        session.tick(&host, &events(&[ViewerEvent::SelectSlot(SlotIndex::new(5))]));
        assert_eq!(session.slot(), SlotIndex::new(5));
    }

    #[test]
    fn reload_picks_up_config_changes() {
        let host = MockHost::new();
        let mut session = open(&host);
        assert_eq!(session.preset().target(), NudgeTarget::Position);
        host.set_config("nudge", "28672");
        session.tick(&host, &FrameInput::default());
        assert_eq!(session.preset().target(), NudgeTarget::Position);
        session.tick(&host, &events(&[ViewerEvent::Reload]));
        assert_eq!(session.preset().target(), NudgeTarget::EndPosition);
    }

    #[test]
    fn edit_round_trip() {
        let host = MockHost::new();
        let mut session = open(&host);
        let actions = session.settings.actions;
        session.tick(
            &host,
            &events(&[ViewerEvent::SelectSlot(SlotIndex::new(6)), ViewerEvent::Edit]),
        );
        assert!(session.is_editing());
        // The user changes settings in the dialog
        host.set_config("nudge6", "8192");
        session.tick(&host, &FrameInput::default());
        assert!(session.is_editing());
        assert_eq!(session.preset().target(), NudgeTarget::Position);
        // ... and closes it
        host.set_toggle_state(actions.open_editor, false);
        assert!(session.tick(&host, &FrameInput::default()));
        assert!(!session.is_editing());
        assert_eq!(session.preset().target(), NudgeTarget::LeftEdge);
        assert_eq!(
            host.calls.last_arg(),
            HostCall::Command(actions.bank_2.save.offset_by(1).unwrap())
        );
    }

    #[test]
    fn edited_slot_not_shown_anymore() {
        let host = MockHost::new();
        let mut session = open(&host);
        let actions = session.settings.actions;
        session.tick(
            &host,
            &events(&[ViewerEvent::SelectSlot(SlotIndex::new(2)), ViewerEvent::Edit]),
        );
        session.tick(&host, &events(&[ViewerEvent::SelectSlot(SlotIndex::new(4))]));
        host.set_config("nudge2", "8192");
        host.set_toggle_state(actions.open_editor, false);
        session.tick(&host, &FrameInput::default());
        assert!(!session.is_editing());
        assert_eq!(session.slot(), SlotIndex::new(4));
        assert_eq!(session.preset().target(), NudgeTarget::Position);
    }

    #[test]
    fn nudge_from_viewer() {
        let host = MockHost::new();
        let mut session = open(&host);
        let actions = session.settings.actions;
        session.tick(&host, &events(&[ViewerEvent::NudgeLeft]));
        session.tick(
            &host,
            &events(&[ViewerEvent::SelectSlot(SlotIndex::new(2)), ViewerEvent::NudgeRight]),
        );
        assert_eq!(
            host.commands(),
            vec![
                actions.last.nudge_left,
                actions.bank_1.nudge_right.offset_by(1).unwrap()
            ]
        );
    }

    #[test]
    fn about_without_package_manager() {
        let host = MockHost::new();
        let mut session = open(&host);
        session.tick(&host, &events(&[ViewerEvent::About]));
        assert_eq!(host.message_boxes.invocation_count(), 1);
        assert_eq!(host.package_abouts.invocation_count(), 0);
        host.set_package_manager_available(true);
        session.tick(&host, &events(&[ViewerEvent::About]));
        assert_eq!(host.message_boxes.invocation_count(), 1);
        assert_eq!(host.package_abouts.last_arg(), "Nudge settings viewer");
    }

    #[test]
    fn close_persists_geometry() {
        let host = MockHost::new();
        let mut session = open(&host);
        let geometry = WindowGeometry {
            width: 600,
            height: 250,
            dock: 0,
            x: 10,
            y: 20,
        };
        assert!(session.tick(&host, &FrameInput::default().with_geometry(geometry)));
        let input = FrameInput::from_chars([-1, 'r' as i32]);
        assert!(!session.tick(&host, &input));
        assert_eq!(
            host.ext_state_value("nudge_settings_viewer", "window_geometry"),
            Some(("600 250 0 10 20".to_string(), true))
        );
        // Reopening restores it
        let session = open(&host);
        assert_eq!(session.geometry(), geometry);
    }

    #[test]
    fn malformed_geometry_falls_back_to_default() {
        let host = MockHost::new();
        host.set_ext_state("nudge_settings_viewer", "window_geometry", "1 2 3", true);
        let session = open(&host);
        assert_eq!(session.geometry(), WindowGeometry::default());
    }
}
