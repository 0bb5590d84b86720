use std::fmt;

/// Errors raised while persisting, loading or configuring settings
#[derive(Debug)]
pub enum SettingsError {
    /// Encoding or decoding failed
    Serialization(String),
    /// IO operation failed
    Io(std::io::Error),
    /// Record checksum verification failed
    ChecksumMismatch,
    /// Record was written by a newer or unknown format version
    UnsupportedRecordVersion(u32),
    /// Integer does not name a version tolerance level
    UnknownToleranceLevel(u8),
    /// Configuration document is malformed
    InvalidConfig(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            SettingsError::Io(err) => write!(f, "IO error: {err}"),
            SettingsError::ChecksumMismatch => write!(f, "Checksum verification failed"),
            SettingsError::UnsupportedRecordVersion(version) => {
                write!(f, "Unsupported settings record version: {version}")
            }
            SettingsError::UnknownToleranceLevel(level) => {
                write!(f, "Unknown version tolerance level: {level}")
            }
            SettingsError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<bincode::Error> for SettingsError {
    fn from(err: bincode::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}

impl From<rmp_serde::encode::Error> for SettingsError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for SettingsError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}

impl From<postcard::Error> for SettingsError {
    fn from(err: postcard::Error) -> Self {
        SettingsError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::InvalidConfig(err.to_string())
    }
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
