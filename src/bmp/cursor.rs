//! Bounds-checked big-endian reader over the input buffer.

use crate::error::BmpError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn truncated(&self, needed: usize) -> BmpError {
        BmpError::TruncatedData {
            needed,
            actual: self.data.len(),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute offset. Positioning exactly at the end is allowed.
    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(self.truncated(pos));
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), BmpError> {
        let new_pos = self.pos.checked_add(n).ok_or(self.truncated(usize::MAX))?;
        self.set_position(new_pos)
    }

    /// Borrow the next `n` bytes and advance past them.
    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8], BmpError> {
        let end = self.pos.checked_add(n).ok_or(self.truncated(usize::MAX))?;
        let data: &'a [u8] = self.data;
        let slice = data.get(self.pos..end).ok_or(self.truncated(end))?;
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_slice(N)?);
        Ok(buf)
    }

    pub(crate) fn get_u16_be(&mut self) -> Result<u16, BmpError> {
        self.read_fixed().map(u16::from_be_bytes)
    }

    pub(crate) fn get_u32_be(&mut self) -> Result<u32, BmpError> {
        self.read_fixed().map(u32::from_be_bytes)
    }

    pub(crate) fn get_i32_be(&mut self) -> Result<i32, BmpError> {
        self.read_fixed().map(i32::from_be_bytes)
    }
}
