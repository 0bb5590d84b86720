use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};
use std::borrow::Cow;
use std::io::{Read, Write};

use crate::customization::Settings;
use crate::errors::SettingsResult;
use crate::serialization::{SerializationFormat, SerializationOptions};

/// Serialize any serde value using the specified options
pub fn encode<T: Serialize>(value: &T, options: &SerializationOptions) -> SettingsResult<Vec<u8>> {
    let serialized = match options.format() {
        SerializationFormat::Bincode => bincode::serialize(value)?,
        SerializationFormat::MessagePack => rmp_serde::to_vec(value)?,
        SerializationFormat::Postcard => postcard::to_allocvec(value)?,
    };

    if options.compress() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::new(options.compression_level()));
        encoder.write_all(&serialized)?;
        let compressed = encoder.finish()?;
        debug!(
            "encoded {} bytes as {:?}, gzip to {} bytes",
            serialized.len(),
            options.format(),
            compressed.len()
        );
        Ok(compressed)
    } else {
        debug!("encoded {} bytes as {:?}", serialized.len(), options.format());
        Ok(serialized)
    }
}

/// Deserialize a serde value written by [`encode`] with the same options
pub fn decode<T: DeserializeOwned>(data: &[u8], options: &SerializationOptions) -> SettingsResult<T> {
    let decompressed = gunzip_if_compressed(data, options)?;

    let value = match options.format() {
        SerializationFormat::Bincode => bincode::deserialize(&decompressed)?,
        SerializationFormat::MessagePack => rmp_serde::from_slice(&decompressed)?,
        SerializationFormat::Postcard => postcard::from_bytes(&decompressed)?,
    };

    Ok(value)
}

/// Strip the gzip wrapper when the options say there is one; plain input is
/// borrowed as is
fn gunzip_if_compressed<'a>(
    data: &'a [u8],
    options: &SerializationOptions,
) -> SettingsResult<Cow<'a, [u8]>> {
    if !options.compress() {
        return Ok(Cow::Borrowed(data));
    }
    let mut decoder = GzDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(Cow::Owned(decompressed))
}

/// Serialize settings using the specified options
pub fn encode_settings(settings: &Settings, options: &SerializationOptions) -> SettingsResult<Vec<u8>> {
    encode(settings, options)
}

/// Deserialize settings using the specified options
pub fn decode_settings(data: &[u8], options: &SerializationOptions) -> SettingsResult<Settings> {
    decode(data, options)
}
