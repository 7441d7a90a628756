//! # zenmono
//!
//! Decoder for monochrome (1-bit-per-pixel) uncompressed BMP files, with an
//! ASCII renderer for terminal display.
//!
//! Decoding validates the 54-byte header, derives the row geometry (packed
//! row stride, 4-byte on-disk alignment, bottom-up vs top-down orientation),
//! and copies each padded on-disk row into a tightly packed buffer whose
//! row 0 is always the topmost pixel row.
//!
//! ## Supported input
//!
//! - Windows BMP with the `BM` signature and a 54-byte header
//! - 1 bit per pixel, uncompressed, rows padded to 4-byte boundaries
//! - Bottom-up (height >= 0) and top-down (height < 0) row order
//!
//! ## Known limitations
//!
//! - Only the low 16 bits of the 4-byte pixel-data-offset field (bytes
//!   10..14 of the header) are honored. A file that places its pixel data
//!   past byte 65535 decodes from the wrong position.
//!
//! ## Non-Goals
//!
//! - Other bit depths, palettes, RLE, or bitfields (use a full BMP decoder
//!   such as zenbitmaps for those)
//! - Encoding
//!
//! ## Usage
//!
//! ```no_run
//! use zenmono::{DecodeRequest, render_ascii};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = zenmono::BmpInfo::from_bytes(data)?;
//! println!("{}x{} at {} bpp", info.width, info.height, info.depth);
//!
//! // Decode and render
//! let bitmap = DecodeRequest::new(data).decode()?;
//! print!("{}", render_ascii(&bitmap));
//! # Ok::<(), zenmono::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod decode;
mod error;
mod info;
mod limits;
mod render;

// Re-exports
pub use decode::{DecodeRequest, MonoBitmap, decode_bmp};
#[cfg(feature = "std")]
pub use decode::{decode_file, decode_stream};
pub use error::BitmapError;
pub use info::BmpInfo;
pub use limits::Limits;
pub use render::{RenderOptions, render_ascii, render_ascii_with};
