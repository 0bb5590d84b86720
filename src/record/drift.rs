use std::fmt;

use crate::customization::Settings;

/// Fields that differ between the settings a payload was written with and
/// the settings it is being read with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsDrift {
    pub serialization_method: bool,
    pub deserialization_method: bool,
    pub version_tolerance: bool,
}

impl SettingsDrift {
    /// Compare writer settings against reader settings field by field
    pub fn between(writer: &Settings, reader: &Settings) -> Self {
        Self {
            serialization_method: writer.serialization_method() != reader.serialization_method(),
            deserialization_method: writer.deserialization_method()
                != reader.deserialization_method(),
            version_tolerance: writer.version_tolerance() != reader.version_tolerance(),
        }
    }

    /// True when the two settings are identical
    pub fn is_empty(&self) -> bool {
        !(self.serialization_method || self.deserialization_method || self.version_tolerance)
    }

    /// Number of differing fields
    pub fn count(&self) -> usize {
        [
            self.serialization_method,
            self.deserialization_method,
            self.version_tolerance,
        ]
        .iter()
        .filter(|changed| **changed)
        .count()
    }
}

impl fmt::Display for SettingsDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no drift");
        }
        let mut names = Vec::with_capacity(3);
        if self.serialization_method {
            names.push("serialization_method");
        }
        if self.deserialization_method {
            names.push("deserialization_method");
        }
        if self.version_tolerance {
            names.push("version_tolerance");
        }
        write!(f, "drift in {}", names.join(", "))
    }
}
