use log::{info, LevelFilter};
use serde::Deserialize;
use std::path::Path;

use crate::customization::{Method, Settings, VersionToleranceLevel};
use crate::errors::SettingsResult;
use crate::serialization::{SerializationFormat, SerializationOptions};

/// Application-level configuration around the engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Settings handed to the serialization engine
    pub settings: Settings,
    /// How settings records are persisted
    pub persistence: SerializationOptions,
    /// Log at debug level instead of info (RUST_LOG still overrides)
    pub debug: bool,
}

/// Shape of a JSON configuration document. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    serialization_method: Option<String>,
    deserialization_method: Option<String>,
    version_tolerance: Option<u8>,
    format: Option<String>,
    compress: Option<bool>,
    compression_level: Option<u32>,
    debug: Option<bool>,
}

impl SettingsConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            persistence: SerializationOptions::default(),
            debug: false,
        }
    }

    /// Create configuration optimized for development
    pub fn development() -> Self {
        Self {
            settings: Settings::tolerant(),
            persistence: SerializationOptions::fastest(),
            debug: true,
        }
    }

    /// Create configuration optimized for production
    pub fn production() -> Self {
        Self {
            settings: Settings::default(),
            persistence: SerializationOptions::balanced(),
            debug: false,
        }
    }

    /// Set engine settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set persistence options
    pub fn with_persistence(mut self, persistence: SerializationOptions) -> Self {
        self.persistence = persistence;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Default log filter for this configuration
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let file: ConfigFile = serde_json::from_str(json)?;
        Self::from_file_contents(file)
    }

    /// Read and parse a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("loaded settings configuration from {}", path.display());
        Ok(config)
    }

    fn from_file_contents(file: ConfigFile) -> SettingsResult<Self> {
        let defaults = Self::new();

        let serialization_method = match file.serialization_method {
            Some(name) => name.parse::<Method>()?,
            None => defaults.settings.serialization_method(),
        };
        let deserialization_method = match file.deserialization_method {
            Some(name) => name.parse::<Method>()?,
            None => defaults.settings.deserialization_method(),
        };
        let version_tolerance = match file.version_tolerance {
            Some(level) => VersionToleranceLevel::try_from(level)?,
            None => defaults.settings.version_tolerance(),
        };
        let format = match file.format {
            Some(name) => name.parse::<SerializationFormat>()?,
            None => defaults.persistence.format(),
        };

        Ok(Self {
            settings: Settings::new(serialization_method, deserialization_method, version_tolerance),
            persistence: SerializationOptions::new(
                format,
                file.compress.unwrap_or(defaults.persistence.compress()),
                file.compression_level
                    .unwrap_or(defaults.persistence.compression_level()),
            ),
            debug: file.debug.unwrap_or(defaults.debug),
        })
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self::new()
    }
}
