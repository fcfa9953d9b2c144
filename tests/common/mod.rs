//! Builds synthetic BMP buffers in the big-endian layout the decoder reads.

#![allow(dead_code)]

use zenplanes::{PixelFormat, RowPadding};

/// Filler written into padding so a mis-skip shows up in plane values.
pub const PAD_BYTE: u8 = 0xEE;

pub struct Fixture {
    pub width: i32,
    pub height: i32,
    pub depth: u16,
    pub planes: u16,
    pub compression: u32,
    pub dib_header_size: u32,
    /// Value written at offset 46; 0 asks the decoder to derive it.
    pub declared_colors: u32,
    pub palette: Vec<[u8; 4]>,
    /// Unpadded pixel bytes, row-major.
    pub pixels: Vec<u8>,
    pub padding: RowPadding,
    /// Write padding after the final row too, as real files do.
    pub pad_last_row: bool,
}

impl Fixture {
    pub fn rgb24(width: i32, height: i32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width * height * 3) as usize);
        Self {
            width,
            height,
            depth: 24,
            planes: 1,
            compression: 0,
            dib_header_size: 40,
            declared_colors: 0,
            palette: Vec::new(),
            pixels,
            padding: RowPadding::Legacy,
            pad_last_row: true,
        }
    }

    pub fn indexed8(width: i32, height: i32, palette: Vec<[u8; 4]>, keys: Vec<u8>) -> Self {
        assert_eq!(keys.len(), (width * height) as usize);
        Self {
            width,
            height,
            depth: 8,
            planes: 1,
            compression: 0,
            dib_header_size: 40,
            declared_colors: palette.len() as u32,
            palette,
            pixels: keys,
            padding: RowPadding::Legacy,
            pad_last_row: true,
        }
    }

    fn format(&self) -> PixelFormat {
        if self.depth == 8 {
            PixelFormat::Indexed8
        } else {
            PixelFormat::Rgb24
        }
    }

    pub fn pixel_array_offset(&self) -> u32 {
        54 + 4 * self.palette.len() as u32
    }

    pub fn build(&self) -> Vec<u8> {
        let format = self.format();
        let row_len = self.width as usize * format.bytes_per_pixel();
        let pad = self.padding.padding_bytes(format, self.width as usize);

        let mut pixel_array = Vec::new();
        for (i, row) in self.pixels.chunks(row_len.max(1)).enumerate() {
            pixel_array.extend_from_slice(row);
            if self.pad_last_row || i + 1 < self.height as usize {
                pixel_array.extend(std::iter::repeat_n(PAD_BYTE, pad));
            }
        }

        let offset = self.pixel_array_offset();
        let file_size = offset + pixel_array.len() as u32;

        let mut out = vec![0u8; 54];
        out[0..2].copy_from_slice(b"BM");
        out[2..6].copy_from_slice(&file_size.to_be_bytes());
        out[10..14].copy_from_slice(&offset.to_be_bytes());
        out[14..18].copy_from_slice(&self.dib_header_size.to_be_bytes());
        out[18..22].copy_from_slice(&self.width.to_be_bytes());
        out[22..26].copy_from_slice(&self.height.to_be_bytes());
        out[26..28].copy_from_slice(&self.planes.to_be_bytes());
        out[28..30].copy_from_slice(&self.depth.to_be_bytes());
        out[30..34].copy_from_slice(&self.compression.to_be_bytes());
        out[34..38].copy_from_slice(&(pixel_array.len() as u32).to_be_bytes());
        out[46..50].copy_from_slice(&self.declared_colors.to_be_bytes());
        for entry in &self.palette {
            out.extend_from_slice(entry);
        }
        out.extend_from_slice(&pixel_array);
        out
    }
}

/// Palette of `n` entries with key `k` mapping to a color derived from `k`.
pub fn gradient_palette(n: usize) -> Vec<[u8; 4]> {
    (0..n)
        .map(|k| {
            let k = k as u8;
            [k, 255 - k, k.wrapping_mul(7), k]
        })
        .collect()
}

pub fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            for c in 0..bpp {
                pixels[off + c] = if (x + y) % 2 == 0 {
                    200 + c as u8 * 20
                } else {
                    10 + c as u8 * 30
                };
            }
        }
    }
    pixels
}

pub fn noise_pattern(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
