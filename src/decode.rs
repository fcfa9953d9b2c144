use enough::Stop;

use crate::error::BmpError;
use crate::image::{BmpHeader, BmpImage, PixelFormat};
use crate::limits::Limits;

/// How many filler bytes follow each stored pixel row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowPadding {
    /// The layout the files this decoder targets were written with:
    /// 24-bit rows are followed by `width % 4` bytes, 8-bit rows by
    /// `4 - width % 4` bytes (a full 4 bytes when the width is a multiple
    /// of 4).
    #[default]
    Legacy,
    /// Standard BMP layout: every row is padded to a multiple of 4 bytes.
    Aligned,
}

impl RowPadding {
    /// Filler bytes after a row of `width` pixels.
    pub fn padding_bytes(self, format: PixelFormat, width: usize) -> usize {
        match (self, format) {
            (Self::Legacy, PixelFormat::Rgb24) => width % 4,
            (Self::Legacy, PixelFormat::Indexed8) => 4 - width % 4,
            (Self::Aligned, format) => {
                let unpadded = (width % 4) * format.bytes_per_pixel();
                (4 - unpadded % 4) % 4
            }
        }
    }
}

/// BMP decode request builder.
///
/// ```no_run
/// use zenplanes::{DecodeRequest, Limits, RowPadding, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_row_padding(RowPadding::Legacy)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), zenplanes::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    row_padding: RowPadding,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            row_padding: RowPadding::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_row_padding(mut self, row_padding: RowPadding) -> Self {
        self.row_padding = row_padding;
        self
    }

    /// Parse and validate the headers only.
    pub fn probe(&self) -> Result<BmpHeader, BmpError> {
        crate::bmp::probe(self.data)
    }

    /// Decode the whole image. `stop` is polled every 16 rows.
    pub fn decode(self, stop: impl Stop) -> Result<BmpImage, BmpError> {
        crate::bmp::decode(self.data, self.limits, self.row_padding, &stop)
    }
}
