use thiserror::Error;

/// Errors reading or writing a want list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed list file: {0}")]
    Malformed(String),
}

impl StoreError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// Errors loading, validating or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid setting: {0}")]
    InvalidValue(String),
}

impl SettingsError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}

/// Errors that stop a reconciliation pass.
#[derive(Debug, Error)]
pub enum PassError {
    #[error("Could not load want list: {0}")]
    Load(#[source] StoreError),

    #[error("Could not save want list: {0}")]
    Save(#[source] StoreError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
