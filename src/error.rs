use alloc::string::String;

/// Errors from monochrome BMP decoding.
///
/// Every variant is fatal to the decode that produced it; nothing is retried
/// internally and no partially decoded bitmap is ever returned alongside an
/// error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    /// The underlying byte source could not be opened or read.
    #[cfg(feature = "std")]
    #[error("cannot read byte source: {0}")]
    SourceUnavailable(std::io::Error),

    #[error("header too short: need 54 bytes, got {available}")]
    TruncatedHeader { available: usize },

    #[error("invalid signature: expected [42, 4D] (\"BM\"), found {found:02X?}")]
    InvalidSignature { found: [u8; 2] },

    #[error("unsupported bit depth {depth}: only 1-bit monochrome is accepted")]
    UnsupportedDepth { depth: u16 },

    /// Width or height yields a nonsensical buffer size (negative width, or
    /// a size that overflows).
    #[error("invalid geometry {width}x{height}")]
    InvalidGeometry { width: i32, height: i32 },

    /// The pixel region is shorter than the header geometry implies.
    #[error("unexpected end of pixel data")]
    UnexpectedEof,

    #[error("cannot allocate {bytes}-byte buffer")]
    AllocationFailure { bytes: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}
