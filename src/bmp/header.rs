//! File header and 40-byte DIB header parsing.
//!
//! Every multi-byte field is read big-endian at a fixed offset.

use log::trace;

use super::cursor::Cursor;
use crate::error::BmpError;
use crate::image::{BmpHeader, PixelFormat};

pub(crate) const MAGIC: [u8; 2] = *b"BM";
pub(crate) const INFO_HEADER_SIZE: u32 = 40;
/// File header (14) plus info header (40).
pub(crate) const HEADERS_END: usize = 54;

// Offsets of fields that follow a skipped region.
const PIXEL_ARRAY_OFFSET_AT: usize = 10;
const COLOR_COUNT_AT: usize = 46;

/// Parse and validate both headers.
///
/// The checks run in field order, so the first violated field decides the
/// error. Reads nothing past offset 54.
pub(crate) fn parse_header(data: &[u8]) -> Result<BmpHeader, BmpError> {
    let mut bytes = Cursor::new(data);

    let magic = bytes.read_fixed::<2>()?;
    if magic != MAGIC {
        return Err(BmpError::InvalidMagic(magic));
    }
    let file_size = bytes.get_u32_be()?;
    bytes.set_position(PIXEL_ARRAY_OFFSET_AT)?;
    let pixel_array_offset = bytes.get_u32_be()?;

    let dib_header_size = bytes.get_u32_be()?;
    if dib_header_size != INFO_HEADER_SIZE {
        return Err(BmpError::UnsupportedHeaderVariant(dib_header_size));
    }
    let width = bytes.get_i32_be()?;
    let height = bytes.get_i32_be()?;

    let planes_constant = bytes.get_u16_be()?;
    if planes_constant != 1 {
        return Err(BmpError::InvalidPlanesField(planes_constant));
    }

    let depth = bytes.get_u16_be()?;
    let format = u8::try_from(depth)
        .ok()
        .and_then(PixelFormat::from_depth)
        .ok_or(BmpError::UnsupportedFormat(depth))?;
    let bits_per_pixel = format.bits_per_pixel();

    let compression = bytes.get_u32_be()?;
    if compression != 0 {
        return Err(BmpError::UnsupportedCompression(compression));
    }
    let image_size_raw = bytes.get_u32_be()?;

    // horizontal and vertical resolution are not used
    bytes.set_position(COLOR_COUNT_AT)?;
    let declared_colors = bytes.get_u32_be()?;
    let color_count = match declared_colors {
        0 => 1u32 << bits_per_pixel,
        n => n,
    };
    bytes.set_position(HEADERS_END)?;

    if width <= 0 || height <= 0 {
        return Err(BmpError::InvalidDimensions { width, height });
    }

    trace!("BMP file size field: {file_size}");
    trace!("BMP pixel array offset: {pixel_array_offset}");
    trace!("BMP dimensions: {width}x{height}");
    trace!("BMP format: {format:?}, declared colors: {declared_colors}");

    Ok(BmpHeader {
        magic,
        file_size,
        pixel_array_offset,
        dib_header_size,
        width,
        height,
        planes_constant,
        format,
        compression,
        image_size_raw,
        color_count,
    })
}
