use proptest::prelude::*;
use serialization_settings::{
    serialization::{decode_settings, encode_settings},
    Method, SerializationFormat, SerializationOptions, Settings, SettingsConfig, SettingsError,
    SettingsRecord, VersionToleranceLevel,
};
use tempfile::TempDir;

fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

fn tolerance_strategy() -> impl Strategy<Value = VersionToleranceLevel> {
    prop::sample::select(VersionToleranceLevel::ALL.to_vec())
}

fn options_strategy() -> impl Strategy<Value = SerializationOptions> {
    (
        prop::sample::select(SerializationFormat::ALL.to_vec()),
        any::<bool>(),
        0u32..=9,
    )
        .prop_map(|(format, compress, level)| SerializationOptions::new(format, compress, level))
}

proptest! {
    #[test]
    fn prop_accessors_return_constructor_arguments(
        ser in method_strategy(),
        de in method_strategy(),
        tolerance in tolerance_strategy(),
    ) {
        let settings = Settings::new(ser, de, tolerance);
        prop_assert_eq!(settings.serialization_method(), ser);
        prop_assert_eq!(settings.deserialization_method(), de);
        prop_assert_eq!(settings.version_tolerance(), tolerance);
    }

    #[test]
    fn prop_settings_round_trip(
        ser in method_strategy(),
        de in method_strategy(),
        tolerance in tolerance_strategy(),
        options in options_strategy(),
    ) {
        let settings = Settings::new(ser, de, tolerance);
        let bytes = encode_settings(&settings, &options).unwrap();
        prop_assert_eq!(decode_settings(&bytes, &options).unwrap(), settings);
    }

    #[test]
    fn prop_record_round_trip(
        ser in method_strategy(),
        de in method_strategy(),
        tolerance in tolerance_strategy(),
        options in options_strategy(),
        payload in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let record = SettingsRecord::new(Settings::new(ser, de, tolerance), payload);
        let bytes = record.to_bytes(&options).unwrap();
        prop_assert_eq!(SettingsRecord::from_bytes(&bytes, &options).unwrap(), record);
    }
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.serialization_method(), Method::Generated);
    assert_eq!(settings.deserialization_method(), Method::Generated);
    assert_eq!(settings.version_tolerance(), VersionToleranceLevel::Exact);
    assert_eq!(settings.version_tolerance().level(), 0);
}

#[test]
fn test_record_persistence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.rec");
    let options = SerializationOptions::new(SerializationFormat::MessagePack, true, 6);

    let writer = Settings::new(
        Method::Reflective,
        Method::Generated,
        VersionToleranceLevel::FieldRemoval,
    );
    let record = SettingsRecord::new(writer, b"serialized graph".to_vec());
    record.save(&path, &options).unwrap();

    let loaded = SettingsRecord::load(&path, &options).unwrap();
    assert_eq!(loaded, record);
    assert_eq!(loaded.settings.serialization_method(), Method::Reflective);
    assert_eq!(loaded.settings.deserialization_method(), Method::Generated);
    assert_eq!(loaded.settings.version_tolerance().level(), 2);
}

#[test]
fn test_simulated_layout_change() {
    // Writer stores strict settings; reader later relaxes tolerance after a
    // field was added to the type.
    let options = SerializationOptions::fastest();
    let record = SettingsRecord::new(Settings::default(), vec![0xde, 0xad]);
    let bytes = record.to_bytes(&options).unwrap();

    let reader = Settings::default().with_version_tolerance(VersionToleranceLevel::FieldAddition);
    let restored = SettingsRecord::from_bytes(&bytes, &options).unwrap();
    let drift = restored.drift(&reader);

    assert!(!drift.is_empty());
    assert!(drift.version_tolerance);
    assert!(!drift.serialization_method && !drift.deserialization_method);
    assert!(reader.version_tolerance().allows_field_addition());
}

#[test]
fn test_corrupted_record_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.rec");
    let options = SerializationOptions::fastest();

    let record = SettingsRecord::new(Settings::tolerant(), b"payload".to_vec());
    record.save(&path, &options).unwrap();

    let mut bytes = std::fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xff;
    std::fs::write(&path, &bytes).unwrap();

    assert!(matches!(
        SettingsRecord::load(&path, &options),
        Err(SettingsError::ChecksumMismatch)
    ));
}

#[test]
fn test_missing_record_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = SettingsRecord::load(temp_dir.path().join("absent"), &SerializationOptions::default());
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "deserialization_method": "Reflective", "version_tolerance": 3, "format": "msgpack" }"#,
    )
    .unwrap();

    let config = SettingsConfig::from_json_file(&path).unwrap();
    assert_eq!(config.settings.serialization_method(), Method::Generated);
    assert_eq!(config.settings.deserialization_method(), Method::Reflective);
    assert_eq!(
        config.settings.version_tolerance(),
        VersionToleranceLevel::FieldAdditionAndRemoval
    );
    assert_eq!(config.persistence.format(), SerializationFormat::MessagePack);
}
