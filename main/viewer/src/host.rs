use num_enum::IntoPrimitive;
use reaper_nudge_codec::CommandId;

/// Section of `REAPER.ini` which contains the nudge settings.
pub const REAPER_CONFIG_SECTION: &str = "REAPER";

/// Identifies a media item for the duration of one host call sequence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ItemId(pub usize);

/// Type of message box to be displayed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, IntoPrimitive)]
#[repr(i32)]
pub enum MessageBoxType {
    Ok = 0,
}

/// The REAPER functions the viewer relies on.
///
/// All functions are called from the main thread only. REAPER doesn't report failures for any
/// of them, so neither does this trait.
pub trait NudgeHost {
    /// Reads a value from REAPER's configuration file.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get_config_value(&self, section: &str, key: &str) -> Option<String>;

    /// Runs the given main section action.
    fn main_on_command(&self, command_id: CommandId);

    /// Returns the toggle state of the given action or `None` if it's not a toggle action.
    fn get_toggle_command_state(&self, command_id: CommandId) -> Option<bool>;

    /// Returns the currently selected media items.
    fn selected_items(&self) -> Vec<ItemId>;

    fn set_item_selected(&self, item: ItemId, selected: bool);

    /// Selects or unselects all media items of the current project.
    fn select_all_items(&self, selected: bool);

    fn get_ext_state(&self, section: &str, key: &str) -> Option<String>;

    fn set_ext_state(&self, section: &str, key: &str, value: &str, persist: bool);

    /// Returns whether the package manager extension is installed.
    fn package_manager_is_available(&self) -> bool;

    /// Opens the package manager's "about" window of the given installed package.
    fn show_package_about(&self, package_name: &str);

    fn show_message_box(&self, msg: &str, title: &str, kind: MessageBoxType);

    fn show_console_msg(&self, msg: &str);
}
