use std::env;

use serialization_settings::utils::settings_fingerprint;
use serialization_settings::{
    Method, SerializationFormat, SerializationOptions, Settings, SettingsConfig, SettingsRecord,
    VersionToleranceLevel,
};

fn main() -> anyhow::Result<()> {
    // Optional JSON configuration file
    let config = match env::var("SETTINGS_CONFIG") {
        Ok(path) => SettingsConfig::from_json_file(&path)?,
        Err(_) => SettingsConfig::development(),
    };

    // init logger; RUST_LOG overrides the configured level
    env_logger::builder()
        .filter_level(config.log_level())
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    println!("📋 Configuration:");
    println!("   Serialization: {}", config.settings.serialization_method());
    println!("   Deserialization: {}", config.settings.deserialization_method());
    println!("   Version tolerance: {}", config.settings.version_tolerance().level());
    println!("   Persistence: {:?}", config.persistence);
    println!("   Fingerprint: {}", settings_fingerprint(&config.settings)?);
    println!();

    run_format_comparison(&config.settings)?;
    run_drift_example(&config)?;

    Ok(())
}

/// Encode the same settings with every format and print the sizes
fn run_format_comparison(settings: &Settings) -> anyhow::Result<()> {
    println!("📦 Encoded sizes:");
    for format in SerializationFormat::ALL {
        for compress in [false, true] {
            let options = SerializationOptions::new(format, compress, 9);
            let bytes = serialization_settings::serialization::encode_settings(settings, &options)?;
            let restored =
                serialization_settings::serialization::decode_settings(&bytes, &options)?;
            anyhow::ensure!(restored == *settings, "round trip changed settings");
            println!("   {format:?} (gzip: {compress}): {} bytes", bytes.len());
        }
    }
    println!();
    Ok(())
}

/// Save a record with the writer's settings and compare it with a reader
/// that has relaxed its tolerance level
fn run_drift_example(config: &SettingsConfig) -> anyhow::Result<()> {
    let dir = env::temp_dir().join("serialization_settings_demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("record.bin");

    let record = SettingsRecord::new(config.settings, b"demo payload".to_vec());
    record.save(&path, &config.persistence)?;
    let loaded = SettingsRecord::load(&path, &config.persistence)?;

    let reader = Settings::new(
        Method::Generated,
        Method::Reflective,
        VersionToleranceLevel::FieldAddition,
    );
    println!("🔍 Writer vs reader: {}", loaded.drift(&reader));
    println!("   Record stored at {}", path.display());
    Ok(())
}
