use crate::error::BitmapError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Limits are checked after the
/// geometry is derived and before any pixel buffer is allocated.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded output buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate decode geometry and the output allocation it implies.
    pub(crate) fn check_geometry(
        &self,
        width: u32,
        height: u32,
        out_bytes: usize,
    ) -> Result<(), BitmapError> {
        if let Some(max) = self.max_width {
            if u64::from(width) > max {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if u64::from(height) > max {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_memory_bytes {
            if out_bytes as u64 > max {
                return Err(BitmapError::LimitExceeded(alloc::format!(
                    "output buffer of {out_bytes} bytes exceeds memory limit {max}"
                )));
            }
        }
        Ok(())
    }
}
