use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SettingsError;

/// Strategy the engine uses on one side of the stream (write or read)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Method {
    /// Per-type logic synthesized at runtime (fastest)
    #[default]
    Generated,
    /// Type metadata walked at call time, no synthesis step
    Reflective,
}

impl Method {
    /// Every method, in declaration order
    pub const ALL: [Method; 2] = [Method::Generated, Method::Reflective];

    /// Lowercase name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Generated => "generated",
            Method::Reflective => "reflective",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generated" => Ok(Method::Generated),
            "reflective" => Ok(Method::Reflective),
            other => Err(SettingsError::InvalidConfig(format!(
                "unknown method '{other}', expected 'generated' or 'reflective'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_generated() {
        assert_eq!(Method::default(), Method::Generated);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("generated".parse::<Method>().unwrap(), Method::Generated);
        assert_eq!(" Reflective ".parse::<Method>().unwrap(), Method::Reflective);
        assert!(matches!(
            "emitted".parse::<Method>(),
            Err(SettingsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }
}
