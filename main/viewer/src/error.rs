use derive_more::*;

/// An error which can occur when parsing the persisted window geometry.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(fmt = "invalid window geometry: {}", message)]
pub struct ParseWindowGeometryError {
    message: &'static str,
}

impl ParseWindowGeometryError {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// An error which can occur when loading viewer settings.
#[derive(Debug, Display)]
#[display(fmt = "invalid viewer settings: {}", _0)]
pub struct SettingsError(serde_json::Error);

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self(e)
    }
}
