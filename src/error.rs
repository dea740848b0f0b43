use thiserror::Error;

/// Failures of the preference key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Preference storage is unavailable")]
    Unavailable,

    #[error("Preference storage error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<UiError> for String {
    fn from(err: UiError) -> Self {
        err.to_string()
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
