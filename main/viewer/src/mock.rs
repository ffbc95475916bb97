//! In-memory stand-in for REAPER which records what the viewer does with it.
use crate::{ItemId, MessageBoxType, NudgeHost, REAPER_CONFIG_SECTION};
use reaper_nudge_codec::CommandId;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

pub struct InvocationMock<O: Clone> {
    count: Cell<u32>,
    args: RefCell<Vec<O>>,
}

impl<O: Clone> Default for InvocationMock<O> {
    fn default() -> Self {
        Self {
            count: Cell::new(0),
            args: RefCell::new(Vec::new()),
        }
    }
}

impl<O: Clone> InvocationMock<O> {
    pub fn invoke(&self, arg: O) {
        self.count.replace(self.count.get() + 1);
        self.args.borrow_mut().push(arg);
    }

    pub fn invocation_count(&self) -> u32 {
        self.count.get()
    }

    pub fn last_arg(&self) -> O {
        self.args
            .borrow()
            .last()
            .cloned()
            .expect("There were no invocations")
    }

    pub fn args(&self) -> Vec<O> {
        self.args.borrow().clone()
    }
}

/// What happened on the host, in order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum HostCall {
    Command(CommandId),
    SelectAll(bool),
    SelectItem(ItemId, bool),
}

#[derive(Default)]
pub struct MockHost {
    config: RefCell<HashMap<String, String>>,
    ext_state: RefCell<HashMap<(String, String), (String, bool)>>,
    toggle_states: RefCell<HashMap<CommandId, bool>>,
    selection: RefCell<HashSet<usize>>,
    item_count: Cell<usize>,
    package_manager_available: Cell<bool>,
    /// Command whose invocation flips the toggle state of the same command.
    toggling_command: Cell<Option<CommandId>>,
    pub calls: InvocationMock<HostCall>,
    pub selection_during_commands: InvocationMock<Vec<ItemId>>,
    pub message_boxes: InvocationMock<String>,
    pub package_abouts: InvocationMock<String>,
    pub console_msgs: InvocationMock<String>,
}

impl MockHost {
    pub fn new() -> MockHost {
        Default::default()
    }

    pub fn set_config(&self, key: &str, value: &str) {
        self.config
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn set_toggle_state(&self, command_id: CommandId, on: bool) {
        self.toggle_states.borrow_mut().insert(command_id, on);
    }

    /// Makes the given command toggle its own state when invoked, like a dialog toggle does.
    pub fn make_toggle(&self, command_id: CommandId) {
        self.toggling_command.set(Some(command_id));
        self.set_toggle_state(command_id, false);
    }

    pub fn add_items(&self, count: usize, selected: &[usize]) {
        self.item_count.set(count);
        let mut selection = self.selection.borrow_mut();
        selection.clear();
        selection.extend(selected.iter().copied());
    }

    pub fn set_package_manager_available(&self, available: bool) {
        self.package_manager_available.set(available);
    }

    pub fn ext_state_value(&self, section: &str, key: &str) -> Option<(String, bool)> {
        self.ext_state
            .borrow()
            .get(&(section.to_string(), key.to_string()))
            .cloned()
    }

    pub fn commands(&self) -> Vec<CommandId> {
        self.calls
            .args()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Command(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn sorted_selection(&self) -> Vec<ItemId> {
        let mut items: Vec<_> = self.selection.borrow().iter().copied().collect();
        items.sort_unstable();
        items.into_iter().map(ItemId).collect()
    }
}

impl NudgeHost for MockHost {
    fn get_config_value(&self, section: &str, key: &str) -> Option<String> {
        assert_eq!(section, REAPER_CONFIG_SECTION);
        self.config.borrow().get(key).cloned()
    }

    fn main_on_command(&self, command_id: CommandId) {
        self.calls.invoke(HostCall::Command(command_id));
        self.selection_during_commands
            .invoke(self.sorted_selection());
        if self.toggling_command.get() == Some(command_id) {
            let mut states = self.toggle_states.borrow_mut();
            let state = states.entry(command_id).or_insert(false);
            *state = !*state;
        }
    }

    fn get_toggle_command_state(&self, command_id: CommandId) -> Option<bool> {
        self.toggle_states.borrow().get(&command_id).copied()
    }

    fn selected_items(&self) -> Vec<ItemId> {
        self.sorted_selection()
    }

    fn set_item_selected(&self, item: ItemId, selected: bool) {
        self.calls.invoke(HostCall::SelectItem(item, selected));
        let mut selection = self.selection.borrow_mut();
        if selected {
            selection.insert(item.0);
        } else {
            selection.remove(&item.0);
        }
    }

    fn select_all_items(&self, selected: bool) {
        self.calls.invoke(HostCall::SelectAll(selected));
        let mut selection = self.selection.borrow_mut();
        selection.clear();
        if selected {
            selection.extend(0..self.item_count.get());
        }
    }

    fn get_ext_state(&self, section: &str, key: &str) -> Option<String> {
        self.ext_state_value(section, key).map(|(value, _)| value)
    }

    fn set_ext_state(&self, section: &str, key: &str, value: &str, persist: bool) {
        self.ext_state.borrow_mut().insert(
            (section.to_string(), key.to_string()),
            (value.to_string(), persist),
        );
    }

    fn package_manager_is_available(&self) -> bool {
        self.package_manager_available.get()
    }

    fn show_package_about(&self, package_name: &str) {
        self.package_abouts.invoke(package_name.to_string());
    }

    fn show_message_box(&self, msg: &str, _title: &str, kind: MessageBoxType) {
        assert_eq!(kind, MessageBoxType::Ok);
        self.message_boxes.invoke(msg.to_string());
    }

    fn show_console_msg(&self, msg: &str) {
        self.console_msgs.invoke(msg.to_string());
    }
}
