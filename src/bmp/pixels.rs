//! Pixel array decoding into three channel planes.

use enough::Stop;
use log::debug;

use super::cursor::Cursor;
use super::palette::lookup_table;
use crate::decode::RowPadding;
use crate::error::BmpError;
use crate::image::{BmpHeader, Palette, PixelFormat};
use crate::plane::Plane;

/// Bytes stored for one row's pixels, excluding padding.
fn row_bytes(header: &BmpHeader) -> Result<usize, BmpError> {
    header
        .columns()
        .checked_mul(header.format.bytes_per_pixel())
        .ok_or(BmpError::DimensionsTooLarge {
            width: header.width.unsigned_abs(),
            height: header.height.unsigned_abs(),
        })
}

/// Buffer length the pixel array needs: the offset, every row, and the
/// padding between rows.
fn pixel_array_end(header: &BmpHeader, offset: usize, row_len: usize, pad: usize) -> Option<usize> {
    let rows = header.rows();
    rows.checked_mul(row_len)?
        .checked_add(rows.saturating_sub(1).checked_mul(pad)?)?
        .checked_add(offset)
}

/// Decode rows in stored order (no vertical flip) starting at the pixel
/// array offset.
///
/// Padding is skipped between rows only, so the last row may end exactly at
/// the end of the buffer. The whole extent is checked against the buffer
/// before the planes are allocated.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    palette: &Palette,
    padding: RowPadding,
    stop: &dyn Stop,
) -> Result<[Plane; 3], BmpError> {
    let (width, height) = (header.columns(), header.rows());
    let format = header.format;
    let row_len = row_bytes(header)?;
    let pad = padding.padding_bytes(format, width);

    let offset = usize::try_from(header.pixel_array_offset).unwrap_or(usize::MAX);
    let end = pixel_array_end(header, offset, row_len, pad).unwrap_or(usize::MAX);
    if end > data.len() {
        return Err(BmpError::TruncatedData {
            needed: end,
            actual: data.len(),
        });
    }

    let mut bytes = Cursor::new(data);
    bytes.set_position(offset)?;

    let mut planes = [
        Plane::zeroed(width, height),
        Plane::zeroed(width, height),
        Plane::zeroed(width, height),
    ];
    let [red, green, blue] = &mut planes;
    let table = lookup_table(palette);

    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        if row > 0 {
            bytes.skip(pad)?;
        }
        let src = bytes.read_slice(row_len)?;
        let (r, g, b) = (red.row_mut(row), green.row_mut(row), blue.row_mut(row));

        match format {
            PixelFormat::Rgb24 => {
                for (col, px) in src.chunks_exact(3).enumerate() {
                    r[col] = px[0];
                    g[col] = px[1];
                    b[col] = px[2];
                }
            }
            PixelFormat::Indexed8 => {
                for (col, &key) in src.iter().enumerate() {
                    let color = table[usize::from(key)].ok_or(BmpError::MissingPaletteEntry {
                        index: key,
                        row,
                        col,
                    })?;
                    r[col] = color.r;
                    g[col] = color.g;
                    b[col] = color.b;
                }
            }
        }
    }

    let stored = bytes.position() - offset;
    if header.image_size_raw != 0 && header.image_size_raw as usize != stored {
        debug!(
            "BMP image size field ({}) differs from decoded pixel extent ({stored})",
            header.image_size_raw
        );
    }

    Ok(planes)
}
