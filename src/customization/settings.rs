use serde::{Deserialize, Serialize};

use super::{Method, VersionToleranceLevel};

/// Serialization settings handed to the engine for every call it services.
///
/// The value is immutable: fields are private and the `with_*` helpers
/// consume `self` and return a new value. Settings are themselves
/// serializable so the settings used to write a payload can be stored next
/// to it and compared with the reader's settings later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Settings {
    serialization_method: Method,
    deserialization_method: Method,
    version_tolerance: VersionToleranceLevel,
}

impl Settings {
    /// Create settings from all three selectors
    pub fn new(
        serialization_method: Method,
        deserialization_method: Method,
        version_tolerance: VersionToleranceLevel,
    ) -> Self {
        Self {
            serialization_method,
            deserialization_method,
            version_tolerance,
        }
    }

    /// Reflective on both paths, exact layout match
    pub fn reflective() -> Self {
        Self::new(
            Method::Reflective,
            Method::Reflective,
            VersionToleranceLevel::Exact,
        )
    }

    /// Generated on both paths, fields may be added and removed
    pub fn tolerant() -> Self {
        Self::new(
            Method::Generated,
            Method::Generated,
            VersionToleranceLevel::FieldAdditionAndRemoval,
        )
    }

    /// Method used for serialization
    pub fn serialization_method(&self) -> Method {
        self.serialization_method
    }

    /// Method used for deserialization
    pub fn deserialization_method(&self) -> Method {
        self.deserialization_method
    }

    /// How much the serialized layout may differ from the current one
    pub fn version_tolerance(&self) -> VersionToleranceLevel {
        self.version_tolerance
    }

    pub fn with_serialization_method(self, method: Method) -> Self {
        Self {
            serialization_method: method,
            ..self
        }
    }

    pub fn with_deserialization_method(self, method: Method) -> Self {
        Self {
            deserialization_method: method,
            ..self
        }
    }

    pub fn with_version_tolerance(self, version_tolerance: VersionToleranceLevel) -> Self {
        Self {
            version_tolerance,
            ..self
        }
    }
}
