use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

/// How far a type's layout may drift between write time and read time.
///
/// Discriminants are the integer levels stored in configuration files.
/// Level 0 is the strictest. What each level permits in detail is decided
/// by the engine; the queries below only describe which kinds of change a
/// level names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum VersionToleranceLevel {
    /// Layouts must match exactly
    #[default]
    Exact = 0,
    /// The reader's type may have fields the writer did not
    FieldAddition = 1,
    /// The writer's type may have fields the reader no longer has
    FieldRemoval = 2,
    /// Fields may be both added and removed
    FieldAdditionAndRemoval = 3,
}

impl VersionToleranceLevel {
    /// Every level, strictest first
    pub const ALL: [VersionToleranceLevel; 4] = [
        VersionToleranceLevel::Exact,
        VersionToleranceLevel::FieldAddition,
        VersionToleranceLevel::FieldRemoval,
        VersionToleranceLevel::FieldAdditionAndRemoval,
    ];

    /// Integer value of this level
    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, VersionToleranceLevel::Exact)
    }

    pub fn allows_field_addition(&self) -> bool {
        matches!(
            self,
            VersionToleranceLevel::FieldAddition | VersionToleranceLevel::FieldAdditionAndRemoval
        )
    }

    pub fn allows_field_removal(&self) -> bool {
        matches!(
            self,
            VersionToleranceLevel::FieldRemoval | VersionToleranceLevel::FieldAdditionAndRemoval
        )
    }
}

impl TryFrom<u8> for VersionToleranceLevel {
    type Error = SettingsError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(VersionToleranceLevel::Exact),
            1 => Ok(VersionToleranceLevel::FieldAddition),
            2 => Ok(VersionToleranceLevel::FieldRemoval),
            3 => Ok(VersionToleranceLevel::FieldAdditionAndRemoval),
            other => Err(SettingsError::UnknownToleranceLevel(other)),
        }
    }
}

impl From<VersionToleranceLevel> for u8 {
    fn from(level: VersionToleranceLevel) -> Self {
        level.level()
    }
}
