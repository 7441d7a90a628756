//! Text rendering of decoded monochrome bitmaps.
//!
//! Emits one glyph per pixel, MSB-first within each packed byte. A stored
//! bit of 0 is drawn filled and a bit of 1 blank, matching the conventional
//! black-then-white monochrome BMP palette. Padding bits past `width` in the
//! final byte of a row are never rendered.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::decode::MonoBitmap;

/// Glyph pair used for rendering.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Glyph for a filled pixel (stored bit 0).
    pub filled: char,
    /// Glyph for a blank pixel (stored bit 1).
    pub blank: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            filled: 'X',
            blank: ' ',
        }
    }
}

/// Render with the default `X`/space glyphs into a fresh string.
pub fn render_ascii(bitmap: &MonoBitmap) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_ascii_with(bitmap, &RenderOptions::default(), &mut out);
    out
}

/// Render one line per pixel row into `out`, topmost row first.
pub fn render_ascii_with<W: Write>(
    bitmap: &MonoBitmap,
    options: &RenderOptions,
    out: &mut W,
) -> fmt::Result {
    // Pixels carried by the final byte of each row.
    let tail_bits = match bitmap.width % 8 {
        0 => 8,
        n => n as usize,
    };

    for row in bitmap.rows() {
        for (index, byte) in row.iter().enumerate() {
            let bits = if index + 1 == row.len() { tail_bits } else { 8 };
            for shift in (8 - bits..8).rev() {
                if (*byte >> shift) & 1 == 0 {
                    out.write_char(options.filled)?;
                } else {
                    out.write_char(options.blank)?;
                }
            }
        }
        out.write_char('\n')?;
    }
    Ok(())
}
