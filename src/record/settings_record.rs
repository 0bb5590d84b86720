use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::customization::Settings;
use crate::errors::{SettingsError, SettingsResult};
use crate::record::SettingsDrift;
use crate::serialization::{decode, encode, SerializationOptions};

/// Current on-disk record format version
pub const RECORD_VERSION: u32 = 1;

/// A payload stored together with the settings it was written with
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SettingsRecord {
    /// Format version for compatibility
    pub version: u32,
    /// Settings used by the writer
    pub settings: Settings,
    /// Opaque payload bytes produced by the engine
    pub payload: Vec<u8>,
    /// Unix timestamp of creation
    pub written_at: u64,
    /// Checksum for integrity verification
    pub checksum: u32,
}

impl SettingsRecord {
    /// Create a record for a payload written with `settings`
    pub fn new(settings: Settings, payload: Vec<u8>) -> Self {
        let mut record = Self {
            version: RECORD_VERSION,
            settings,
            payload,
            written_at: current_timestamp(),
            checksum: 0,
        };
        record.checksum = record.compute_checksum();
        record
    }

    /// CRC32 over every field except the checksum itself. Fields are fed in
    /// declaration order as fixed-width little-endian bytes, the payload
    /// prefixed with its length.
    fn compute_checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&self.version.to_le_bytes());
        hasher.update(&[
            self.settings.serialization_method() as u8,
            self.settings.deserialization_method() as u8,
            self.settings.version_tolerance().level(),
        ]);
        hasher.update(&(self.payload.len() as u64).to_le_bytes());
        hasher.update(&self.payload);
        hasher.update(&self.written_at.to_le_bytes());
        hasher.finalize()
    }

    /// Verify the checksum is correct
    pub fn verify_checksum(&self) -> SettingsResult<()> {
        if self.compute_checksum() == self.checksum {
            Ok(())
        } else {
            Err(SettingsError::ChecksumMismatch)
        }
    }

    /// Which settings fields differ from the reader's settings
    pub fn drift(&self, reader: &Settings) -> SettingsDrift {
        SettingsDrift::between(&self.settings, reader)
    }

    /// Serialize the record
    pub fn to_bytes(&self, options: &SerializationOptions) -> SettingsResult<Vec<u8>> {
        encode(self, options)
    }

    /// Deserialize a record, rejecting unknown versions and corrupt contents
    pub fn from_bytes(data: &[u8], options: &SerializationOptions) -> SettingsResult<Self> {
        let record: SettingsRecord = decode(data, options)?;

        if record.version != RECORD_VERSION {
            warn!("settings record has unsupported version {}", record.version);
            return Err(SettingsError::UnsupportedRecordVersion(record.version));
        }
        if let Err(e) = record.verify_checksum() {
            warn!("settings record failed checksum verification");
            return Err(e);
        }

        Ok(record)
    }

    /// Write the record to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P, options: &SerializationOptions) -> SettingsResult<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes(options)?;
        fs::write(path, &bytes)?;
        debug!("saved settings record ({} bytes) to {}", bytes.len(), path.display());
        Ok(())
    }

    /// Read a record previously written with [`SettingsRecord::save`]
    pub fn load<P: AsRef<Path>>(path: P, options: &SerializationOptions) -> SettingsResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        debug!("loaded settings record ({} bytes) from {}", bytes.len(), path.display());
        Self::from_bytes(&bytes, options)
    }
}

/// Get current Unix timestamp
fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
