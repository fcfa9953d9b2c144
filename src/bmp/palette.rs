use log::trace;

use super::header::HEADERS_END;
use crate::error::BmpError;
use crate::image::{Color, Palette};

const ENTRY_SIZE: usize = 4;

/// Read `color_count` entries of `[red, green, blue, key]` starting right
/// after the headers.
///
/// The fourth byte of each entry is the palette key the pixels refer to.
/// Entries may come in any order; a later entry replaces an earlier one with
/// the same key.
pub(crate) fn parse_palette(data: &[u8], color_count: u32) -> Result<Palette, BmpError> {
    let end = usize::try_from(color_count)
        .ok()
        .and_then(|n| n.checked_mul(ENTRY_SIZE))
        .and_then(|n| n.checked_add(HEADERS_END))
        .ok_or(BmpError::TruncatedData {
            needed: usize::MAX,
            actual: data.len(),
        })?;
    let entries = data.get(HEADERS_END..end).ok_or(BmpError::TruncatedData {
        needed: end,
        actual: data.len(),
    })?;

    let mut palette = Palette::new();
    for entry in entries.chunks_exact(ENTRY_SIZE) {
        palette.insert(entry[3], Color::new(entry[0], entry[1], entry[2]));
    }
    trace!(
        "BMP palette: {color_count} entries read, {} distinct keys",
        palette.len()
    );
    Ok(palette)
}

/// Flatten a palette into a direct lookup by pixel byte.
pub(crate) fn lookup_table(palette: &Palette) -> [Option<Color>; 256] {
    let mut table = [None; 256];
    for (&key, &color) in palette {
        table[usize::from(key)] = Some(color);
    }
    table
}
