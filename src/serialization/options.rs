use super::SerializationFormat;

/// Highest gzip level accepted by flate2
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// How settings and records are turned into bytes.
///
/// Fields are only reachable through [`SerializationOptions::new`] and the
/// presets, so the compression level is always within `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationOptions {
    format: SerializationFormat,
    compress: bool,
    compression_level: u32,
}

impl SerializationOptions {
    /// Create new options; levels above 9 are clamped
    pub fn new(format: SerializationFormat, compress: bool, compression_level: u32) -> Self {
        Self {
            format,
            compress,
            compression_level: compression_level.min(MAX_COMPRESSION_LEVEL),
        }
    }

    /// Plain bincode, no gzip
    pub fn fastest() -> Self {
        Self::new(SerializationFormat::Bincode, false, 0)
    }

    /// Postcard with maximum gzip
    pub fn smallest() -> Self {
        Self::new(SerializationFormat::Postcard, true, MAX_COMPRESSION_LEVEL)
    }

    /// Bincode with medium gzip
    pub fn balanced() -> Self {
        Self::new(SerializationFormat::Bincode, true, 6)
    }

    pub fn format(&self) -> SerializationFormat {
        self.format
    }

    /// Whether output is gzip-wrapped
    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }
}

impl Default for SerializationOptions {
    fn default() -> Self {
        Self::balanced()
    }
}
