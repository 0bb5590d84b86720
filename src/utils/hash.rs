use sha2::{Digest, Sha256};

use crate::customization::Settings;
use crate::errors::SettingsResult;

/// Hex-encoded SHA-256 of the canonical (bincode) form of the settings.
///
/// Equal settings always produce equal fingerprints, so the value can be
/// logged or stored in place of the settings when only identity matters.
pub fn settings_fingerprint(settings: &Settings) -> SettingsResult<String> {
    let canonical = bincode::serialize(settings)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customization::Method;

    #[test]
    fn test_fingerprint_follows_equality() {
        let a = Settings::default();
        let b = Settings::default();
        let c = a.with_serialization_method(Method::Reflective);

        let fa = settings_fingerprint(&a).unwrap();
        assert_eq!(fa.len(), 64);
        assert_eq!(fa, settings_fingerprint(&b).unwrap());
        assert_ne!(fa, settings_fingerprint(&c).unwrap());
    }
}
