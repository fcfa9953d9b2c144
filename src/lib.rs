//! # zenplanes
//!
//! Decoder for uncompressed BMP images that splits pixels into three
//! separate intensity planes (red, green, blue).
//!
//! ## Supported Input
//!
//! - 40-byte info header only, uncompressed
//! - **24-bit**: three bytes per pixel, taken as red, green, blue
//! - **8-bit indexed**: one palette key per pixel
//!
//! The layout follows the files this decoder was built for rather than the
//! public BMP description: every multi-byte header field is big-endian, the
//! fourth byte of each palette entry is the key pixels refer to, rows are
//! taken in stored order (no vertical flip), and row padding follows
//! [`RowPadding::Legacy`] unless configured otherwise.
//!
//! ## Non-Goals
//!
//! - Compressed variants (RLE, bitfields, embedded JPEG/PNG)
//! - Bit depths other than 8 and 24
//! - Encoding
//! - Color management or any processing beyond plane extraction
//!
//! ## Usage
//!
//! ```no_run
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let header = zenplanes::probe(data)?;
//! println!("{}x{} {:?}", header.width, header.height, header.format);
//!
//! let image = zenplanes::decode(data)?;
//! let red = image.red();
//! println!("top-left red intensity: {:?}", red.get(0, 0));
//! # Ok::<(), zenplanes::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod image;
mod limits;
mod plane;

// Re-exports
pub use decode::{DecodeRequest, RowPadding};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BmpError;
pub use image::{BmpHeader, BmpImage, Color, Palette, PixelFormat};
pub use limits::Limits;
pub use plane::Plane;

/// Decode BMP bytes with default settings and no limits.
pub fn decode(data: &[u8]) -> Result<BmpImage, BmpError> {
    DecodeRequest::new(data).decode(Unstoppable)
}

/// Parse and validate the headers without decoding the palette or pixels.
pub fn probe(data: &[u8]) -> Result<BmpHeader, BmpError> {
    bmp::probe(data)
}

/// Read a whole file into memory and decode it.
///
/// Read failures are reported as [`BmpError::Io`].
#[cfg(feature = "std")]
pub fn decode_file(path: impl AsRef<std::path::Path>) -> Result<BmpImage, BmpError> {
    let data = std::fs::read(path)?;
    decode(&data)
}
