//! Serialization settings - configuration contract for a binary object
//! serialization engine.
//!
//! A [`Settings`] value selects the write path, the read path and the
//! version tolerance level the engine applies to every call. Settings are
//! immutable plain data and can themselves be persisted next to a payload
//! ([`SettingsRecord`]) so the writer's settings can later be compared with
//! the reader's.

pub mod config;
pub mod customization;
pub mod errors;
pub mod record;
pub mod serialization;
pub mod utils;

// Re-export commonly used types
pub use config::SettingsConfig;
pub use customization::{Method, Settings, VersionToleranceLevel};
pub use errors::{SettingsError, SettingsResult};
pub use record::{SettingsDrift, SettingsRecord};
pub use serialization::{SerializationFormat, SerializationOptions};
