use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::SettingsError;

/// Byte format used when persisting settings and records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationFormat {
    /// Binary format (fastest)
    Bincode,
    /// MessagePack format (portable)
    MessagePack,
    /// Postcard format (smallest)
    Postcard,
}

impl SerializationFormat {
    pub const ALL: [SerializationFormat; 3] = [
        SerializationFormat::Bincode,
        SerializationFormat::MessagePack,
        SerializationFormat::Postcard,
    ];
}

impl Default for SerializationFormat {
    fn default() -> Self {
        SerializationFormat::Bincode
    }
}

impl FromStr for SerializationFormat {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bincode" => Ok(SerializationFormat::Bincode),
            "messagepack" | "msgpack" => Ok(SerializationFormat::MessagePack),
            "postcard" => Ok(SerializationFormat::Postcard),
            other => Err(SettingsError::InvalidConfig(format!(
                "unknown serialization format '{other}'"
            ))),
        }
    }
}
