//! Monochrome BMP header parsing and pixel extraction.
//!
//! The on-disk format stores each row padded to a 4-byte boundary. Rows are
//! ordered bottom-up when the header height is non-negative and top-down when
//! it is negative. Decoding packs rows to `ceil(width / 8)` bytes and always
//! emits them top-to-bottom.

use alloc::vec::Vec;

use crate::error::BitmapError;

/// Fixed header size consumed by the decoder: 14-byte file header plus a
/// 40-byte info header.
pub(crate) const HEADER_SIZE: usize = 54;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        self.set_position(new_pos)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        if self.pos + N > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), BitmapError> {
        let n = buf.len();
        if self.pos + n > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(())
    }
}

// ── Raw header fields ───────────────────────────────────────────────

/// Header fields at their fixed little-endian offsets, exactly as stored.
pub(crate) struct RawHeader {
    /// Byte offset to the pixel data. Only the low 16 bits of the 4-byte
    /// field at offset 10 are honored; data placed past byte 65535 is
    /// misread. Kept as a documented limitation.
    pub pixel_data_offset: u16,
    /// Signed width from offset 18.
    pub width: i32,
    /// Signed height from offset 22. The sign encodes row order.
    pub height: i32,
    /// Bits per pixel from offset 28.
    pub depth: u16,
}

/// Read the 54-byte header and extract the fields the decoder consumes.
///
/// The signature is checked before any geometry field is read.
pub(crate) fn read_header(data: &[u8]) -> Result<RawHeader, BitmapError> {
    if data.len() < HEADER_SIZE {
        return Err(BitmapError::TruncatedHeader {
            available: data.len(),
        });
    }

    let mut bytes = Cursor::new(data);

    let signature = bytes.read_fixed_bytes::<2>()?;
    if signature != *b"BM" {
        return Err(BitmapError::InvalidSignature { found: signature });
    }

    // File size field and reserved words (offsets 2..10) are not consumed.
    bytes.skip(8)?;

    let pixel_data_offset = bytes.get_u16_le()?;

    // High half of the offset field, then the info header size (12..18).
    bytes.skip(6)?;

    let width = bytes.get_i32_le()?;
    let height = bytes.get_i32_le()?;

    // Planes (offset 26) is not consumed.
    bytes.skip(2)?;

    let depth = bytes.get_u16_le()?;

    Ok(RawHeader {
        pixel_data_offset,
        width,
        height,
        depth,
    })
}

// ── Geometry ────────────────────────────────────────────────────────

/// Row geometry derived from a validated header.
pub(crate) struct Geometry {
    pub width: u32,
    /// Pixel row count: the magnitude of the signed on-disk height.
    pub rows: u32,
    /// First stored row is the visually lowest row.
    pub bottom_up: bool,
    /// Packed bytes per row: `ceil(width / 8)`.
    pub row_stride: usize,
    /// On-disk bytes per row: `row_stride` rounded up to a multiple of 4.
    pub aligned_stride: usize,
    /// Total packed output bytes: `row_stride * rows`.
    pub output_len: usize,
}

/// Gate the bit depth and derive strides and orientation.
pub(crate) fn derive_geometry(header: &RawHeader) -> Result<Geometry, BitmapError> {
    let bottom_up = header.height >= 0;
    let rows = header.height.unsigned_abs();

    if header.depth != 1 {
        return Err(BitmapError::UnsupportedDepth {
            depth: header.depth,
        });
    }

    // A negative width cannot derive an unsigned size.
    if header.width < 0 {
        return Err(BitmapError::InvalidGeometry {
            width: header.width,
            height: header.height,
        });
    }
    let width = header.width as u32;

    let row_stride = (width as usize).div_ceil(8);
    let aligned_stride = row_stride.div_ceil(4) * 4;

    let output_len =
        row_stride
            .checked_mul(rows as usize)
            .ok_or(BitmapError::InvalidGeometry {
                width: header.width,
                height: header.height,
            })?;

    Ok(Geometry {
        width,
        rows,
        bottom_up,
        row_stride,
        aligned_stride,
        output_len,
    })
}

// ── Pixel extraction ────────────────────────────────────────────────

fn alloc_zeroed(len: usize) -> Result<Vec<u8>, BitmapError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| BitmapError::AllocationFailure { bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Copy every on-disk row into a packed top-to-bottom buffer.
///
/// One full linear pass over the pixel region. Each row is pulled through an
/// `aligned_stride`-sized scratch buffer so the alignment padding is consumed
/// and its presence validated, then the packed prefix lands at the
/// orientation-determined output row. Any short read abandons the whole
/// decode; the caller never observes a partially filled buffer.
pub(crate) fn read_pixels(
    data: &[u8],
    header: &RawHeader,
    geometry: &Geometry,
) -> Result<Vec<u8>, BitmapError> {
    let mut pixels = alloc_zeroed(geometry.output_len)?;
    let mut scratch = alloc_zeroed(geometry.aligned_stride)?;
    let mut bytes = Cursor::new(data);

    let base = usize::from(header.pixel_data_offset);
    let rows = geometry.rows as usize;

    for row in 0..rows {
        let pos = row
            .checked_mul(geometry.aligned_stride)
            .and_then(|offset| offset.checked_add(base))
            .ok_or(BitmapError::UnexpectedEof)?;
        bytes.set_position(pos)?;
        bytes.read_exact_bytes(&mut scratch)?;

        let dest_row = if geometry.bottom_up {
            rows - 1 - row
        } else {
            row
        };
        let dest = dest_row * geometry.row_stride;
        pixels[dest..dest + geometry.row_stride].copy_from_slice(&scratch[..geometry.row_stride]);
    }

    Ok(pixels)
}
