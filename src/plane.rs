//! Single-channel intensity grid.

use alloc::vec;
use core::ops::Index;

use imgref::{ImgRef, ImgVec};

/// A fixed-size grid holding one color channel's intensity for every pixel.
///
/// Indexed by `(row, col)`; row 0 is the first row stored in the file.
/// Storage is contiguous with no stride padding.
#[derive(Clone, Debug)]
pub struct Plane {
    img: ImgVec<u8>,
}

impl Plane {
    /// Zero-filled plane. Both dimensions must be non-zero.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            img: ImgVec::new(vec![0u8; width * height], width, height),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Intensity at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.img.buf()[row * self.width() + col])
    }

    /// Iterate over rows, top (first stored) to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.img.buf().chunks_exact(self.width())
    }

    /// All intensities in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        self.img.buf()
    }

    /// Borrow as an [`imgref::ImgRef`].
    pub fn as_img(&self) -> ImgRef<'_, u8> {
        self.img.as_ref()
    }

    /// Take the underlying [`imgref::ImgVec`].
    pub fn into_img(self) -> ImgVec<u8> {
        self.img
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let width = self.width();
        &mut self.img.buf_mut()[row * width..(row + 1) * width]
    }
}

impl Index<(usize, usize)> for Plane {
    type Output = u8;

    /// Panics when `(row, col)` is outside the grid.
    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        assert!(
            row < self.height() && col < self.width(),
            "plane index ({row}, {col}) out of bounds for {}x{} plane",
            self.height(),
            self.width()
        );
        &self.img.buf()[row * self.width() + col]
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.as_slice() == other.as_slice()
    }
}

impl Eq for Plane {}
