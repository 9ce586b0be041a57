use thiserror::Error;

use crate::selection::selectionerror::SelectionError;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    IOError(#[from] std::io::Error),
    #[error("cannot parse settings: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String
    },
    #[error(transparent)]
    Selection(#[from] SelectionError)
}

impl SettingsError {
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> SettingsError {
        SettingsError::InvalidValue { field, reason: reason.into() }
    }
}
