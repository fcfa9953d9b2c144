use alloc::collections::BTreeMap;

use crate::plane::Plane;

/// An RGB triple, one intensity per channel.
pub type Color = rgb::RGB8;

/// Palette of an indexed image, keyed by the byte stored in each pixel.
pub type Palette = BTreeMap<u8, Color>;

/// Pixel encodings the decoder accepts.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per pixel, each byte a palette key.
    Indexed8,
    /// 24 bits per pixel, three channel bytes stored as red, green, blue.
    Rgb24,
}

impl PixelFormat {
    pub(crate) fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            8 => Some(Self::Indexed8),
            24 => Some(Self::Rgb24),
            _ => None,
        }
    }

    /// Bits per pixel.
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Indexed8 => 8,
            Self::Rgb24 => 24,
        }
    }

    /// Bytes each pixel occupies in the pixel array.
    pub fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits_per_pixel() / 8)
    }
}

/// Validated file and DIB header fields.
///
/// Produced by [`crate::probe`] on its own or as part of a [`BmpImage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BmpHeader {
    pub magic: [u8; 2],
    /// Total file length claimed by the file header.
    pub file_size: u32,
    /// Offset of the first pixel row.
    pub pixel_array_offset: u32,
    /// Always 40.
    pub dib_header_size: u32,
    /// Pixel columns, always positive.
    pub width: i32,
    /// Pixel rows, always positive.
    pub height: i32,
    /// Always 1.
    pub planes_constant: u16,
    /// Pixel encoding, from the depth field at offset 28.
    pub format: PixelFormat,
    /// Always 0.
    pub compression: u32,
    /// Pixel array size as declared; never checked against the data.
    pub image_size_raw: u32,
    /// Palette entries to read. A declared 0 is replaced by `2^bits_per_pixel`.
    pub color_count: u32,
}

impl BmpHeader {
    /// 8 or 24.
    pub fn bits_per_pixel(&self) -> u8 {
        self.format.bits_per_pixel()
    }

    /// Width as an unsigned extent.
    pub fn columns(&self) -> usize {
        self.width.unsigned_abs() as usize
    }

    /// Height as an unsigned extent.
    pub fn rows(&self) -> usize {
        self.height.unsigned_abs() as usize
    }
}

/// A decoded BMP: header metadata, the palette (indexed images only), and
/// one intensity [`Plane`] per color channel.
///
/// Built once by the decoder and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpImage {
    header: BmpHeader,
    palette: Palette,
    red: Plane,
    green: Plane,
    blue: Plane,
}

impl BmpImage {
    pub(crate) fn new(header: BmpHeader, palette: Palette, [red, green, blue]: [Plane; 3]) -> Self {
        debug_assert_eq!(palette.is_empty(), header.format != PixelFormat::Indexed8);
        debug_assert!(
            [&red, &green, &blue]
                .iter()
                .all(|p| p.width() == header.columns() && p.height() == header.rows())
        );
        Self {
            header,
            palette,
            red,
            green,
            blue,
        }
    }

    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    pub fn magic(&self) -> [u8; 2] {
        self.header.magic
    }

    pub fn file_size(&self) -> u32 {
        self.header.file_size
    }

    pub fn pixel_array_offset(&self) -> u32 {
        self.header.pixel_array_offset
    }

    pub fn dib_header_size(&self) -> u32 {
        self.header.dib_header_size
    }

    pub fn width(&self) -> i32 {
        self.header.width
    }

    pub fn height(&self) -> i32 {
        self.header.height
    }

    pub fn planes_constant(&self) -> u16 {
        self.header.planes_constant
    }

    pub fn bits_per_pixel(&self) -> u8 {
        self.header.bits_per_pixel()
    }

    pub fn compression(&self) -> u32 {
        self.header.compression
    }

    pub fn image_size_raw(&self) -> u32 {
        self.header.image_size_raw
    }

    pub fn color_count(&self) -> u32 {
        self.header.color_count
    }

    /// Palette keyed by pixel byte; empty for 24-bit images.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn red(&self) -> &Plane {
        &self.red
    }

    pub fn green(&self) -> &Plane {
        &self.green
    }

    pub fn blue(&self) -> &Plane {
        &self.blue
    }

    /// Recombine the three planes at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Option<Color> {
        Some(Color::new(
            self.red.get(row, col)?,
            self.green.get(row, col)?,
            self.blue.get(row, col)?,
        ))
    }

    /// Consume the image, returning the `[red, green, blue]` planes.
    pub fn into_planes(self) -> [Plane; 3] {
        [self.red, self.green, self.blue]
    }
}
