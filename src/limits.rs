use alloc::format;

use crate::error::BmpError;

/// Resource limits applied before any plane storage is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the three planes together.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check the geometry of an image about to be decoded.
    ///
    /// `plane_bytes` is the total allocation for all three planes.
    pub(crate) fn check(&self, width: u32, height: u32, plane_bytes: usize) -> Result<(), BmpError> {
        let pixels = u64::from(width) * u64::from(height);
        let checks = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", pixels, self.max_pixels),
            ("plane memory", plane_bytes as u64, self.max_memory_bytes),
        ];
        for (what, value, limit) in checks {
            if let Some(limit) = limit {
                if value > limit {
                    return Err(BmpError::LimitExceeded(format!(
                        "{what} {value} exceeds limit {limit}"
                    )));
                }
            }
        }
        Ok(())
    }
}
