//! BMP decoder (internal).
//!
//! Use top-level [`crate::decode`], [`crate::probe`] or
//! [`crate::DecodeRequest`].

mod cursor;
mod header;
mod palette;
mod pixels;

use enough::Stop;
use log::debug;

use crate::decode::RowPadding;
use crate::error::BmpError;
use crate::image::{BmpHeader, BmpImage, Palette, PixelFormat};
use crate::limits::Limits;

/// Parse the headers without reading the palette or pixel array.
pub(crate) fn probe(data: &[u8]) -> Result<BmpHeader, BmpError> {
    header::parse_header(data)
}

/// Decode headers, palette and pixel array in that order.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    row_padding: RowPadding,
    stop: &dyn Stop,
) -> Result<BmpImage, BmpError> {
    let header = header::parse_header(data)?;
    check_limits(limits, &header)?;
    stop.check()?;

    let palette = match header.format {
        PixelFormat::Indexed8 => palette::parse_palette(data, header.color_count)?,
        PixelFormat::Rgb24 => Palette::new(),
    };
    let planes = pixels::decode_pixels(data, &header, &palette, row_padding, stop)?;

    debug!(
        "decoded {}x{} {:?} BMP ({} palette keys, {row_padding:?} padding)",
        header.width,
        header.height,
        header.format,
        palette.len()
    );
    Ok(BmpImage::new(header, palette, planes))
}

fn check_limits(limits: Option<&Limits>, header: &BmpHeader) -> Result<(), BmpError> {
    let (width, height) = (header.width.unsigned_abs(), header.height.unsigned_abs());
    let plane_bytes = header
        .columns()
        .checked_mul(header.rows())
        .and_then(|px| px.checked_mul(3))
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check(width, height, plane_bytes)?;
    }
    Ok(())
}
