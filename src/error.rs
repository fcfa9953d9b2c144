use alloc::string::String;
use enough::StopReason;

/// Errors from loading and decoding BMP data.
///
/// Every variant is fatal: a failed decode never yields a partial image.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The byte source could not be read.
    #[cfg(feature = "std")]
    #[error("failed to read BMP source: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid magic bytes {0:?}, expected \"BM\"")]
    InvalidMagic([u8; 2]),

    #[error("unsupported DIB header size {0}, only the 40-byte info header is supported")]
    UnsupportedHeaderVariant(u32),

    #[error("planes field is {0}, expected 1")]
    InvalidPlanesField(u16),

    #[error("unsupported bit depth field {0}, expected 8 or 24")]
    UnsupportedFormat(u16),

    #[error("unsupported compression {0}, only uncompressed (0) is supported")]
    UnsupportedCompression(u32),

    #[error("truncated data: need {needed} bytes, got {actual}")]
    TruncatedData { needed: usize, actual: usize },

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("palette has no entry for index {index} (pixel at row {row}, column {col})")]
    MissingPaletteEntry { index: u8, row: usize, col: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
