use crate::error::BitmapError;

/// Header probe for a monochrome BMP, without decoding pixels.
///
/// Reports the raw on-disk fields. No depth or geometry gates are applied,
/// so a probe can succeed on files that [`crate::DecodeRequest::decode`]
/// rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    /// Signed width as stored at offset 18.
    pub width: i32,
    /// Signed height as stored at offset 22; negative means top-down rows.
    pub height: i32,
    /// Bits per pixel.
    pub depth: u16,
    /// True when rows are stored top-down.
    pub top_down: bool,
    /// Pixel data offset (the low 16 bits of the on-disk field).
    pub pixel_data_offset: u16,
}

impl BmpInfo {
    /// Probe the 54-byte header of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let header = crate::bmp::decode::read_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            depth: header.depth,
            top_down: header.height < 0,
            pixel_data_offset: header.pixel_data_offset,
        })
    }
}
