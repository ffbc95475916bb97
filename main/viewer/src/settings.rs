use crate::{NudgeActions, SettingsError, WindowGeometry};
use serde::{Deserialize, Serialize};

/// Settings of the viewer which don't change at runtime.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Extension state section in which the viewer persists its state.
    pub ext_state_section: String,
    /// Extension state key of the window geometry.
    pub geometry_key: String,
    /// Window geometry used if none has been persisted yet.
    pub default_geometry: WindowGeometry,
    /// Name of this package in the package manager.
    pub package_name: String,
    pub actions: NudgeActions,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            ext_state_section: "nudge_settings_viewer".to_string(),
            geometry_key: "window_geometry".to_string(),
            default_geometry: Default::default(),
            package_name: "Nudge settings viewer".to_string(),
            actions: Default::default(),
        }
    }
}

impl ViewerSettings {
    /// Parses settings from JSON. Missing properties get their default value.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }
}
