//! PNM family: P5 (PGM) read/write, P6 (PPM) write and header read.

mod decode;
mod encode;
pub(crate) mod token;

pub(crate) use decode::{decode_pgm, decode_pgm_into};
pub(crate) use encode::{encode_pgm, encode_ppm};

use crate::error::{BitmapError, FormatWarning};

/// Largest accepted PNM width or height.
pub const PNM_MAX_DIMENSION: u32 = 10000;

/// Maxval every reader and writer here assumes.
pub const PNM_MAXVAL: u32 = 255;

/// Magic number of binary PGM (`P5`).
pub const PGM_MAGIC: u32 = 5;

/// Magic number of binary PPM (`P6`).
pub const PPM_MAGIC: u32 = 6;

/// Parsed PNM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    /// Digit following the `P` (5 = gray, 6 = RGB).
    pub magic: u32,
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    /// Offset of the first pixel byte.
    pub data_offset: usize,
}

impl PnmHeader {
    /// Non-fatal issue with this header, if any.
    pub fn warning(&self) -> Option<FormatWarning> {
        (self.maxval != PNM_MAXVAL).then_some(FormatWarning::NonStandardMaxval(self.maxval))
    }
}

/// Parse any `P<n>` header.
pub fn read_header(data: &[u8]) -> Result<PnmHeader, BitmapError> {
    decode::parse_header(data)
}

/// Parse a header that must be `P5`.
pub fn read_pgm_header(data: &[u8]) -> Result<PnmHeader, BitmapError> {
    expect_magic(decode::parse_header(data)?, PGM_MAGIC)
}

/// Parse a header that must be `P6`.
pub fn read_ppm_header(data: &[u8]) -> Result<PnmHeader, BitmapError> {
    expect_magic(decode::parse_header(data)?, PPM_MAGIC)
}

fn expect_magic(header: PnmHeader, expected: u32) -> Result<PnmHeader, BitmapError> {
    if header.magic != expected {
        return Err(BitmapError::MagicMismatch {
            expected,
            found: header.magic,
        });
    }
    Ok(header)
}
