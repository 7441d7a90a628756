//! Monochrome BMP decoder (internal).
//!
//! Use top-level [`crate::decode_bmp`] or [`crate::DecodeRequest`].

pub(crate) mod decode;

use crate::decode::MonoBitmap;
use crate::error::BitmapError;
use crate::limits::Limits;

/// Decode a 1-bit BMP into a packed top-to-bottom pixel buffer.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<MonoBitmap, BitmapError> {
    let header = decode::read_header(data)?;
    let geometry = decode::derive_geometry(&header)?;
    if let Some(limits) = limits {
        limits.check_geometry(geometry.width, geometry.rows, geometry.output_len)?;
    }
    let pixels = decode::read_pixels(data, &header, &geometry)?;
    Ok(MonoBitmap::new(
        pixels,
        geometry.width,
        geometry.rows,
        header.depth,
        geometry.row_stride,
    ))
}
