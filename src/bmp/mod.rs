//! BMP: 8-bit gray read/write and 24-bit RGB write.

mod decode;
mod encode;
mod header;

pub use header::{
    BMP_SIGNATURE, BmpFileHeader, BmpHeaders, BmpInfoHeader, HEADERS_LEN, MAX_PALETTE_ENTRIES,
    PaletteEntry, identity_palette,
};

pub(crate) use decode::{decode_gray, decode_gray_into};
pub(crate) use encode::{encode_gray, encode_rgb};

use crate::error::BitmapError;

/// Parse the headers and color table without decoding pixels.
pub fn read_headers(data: &[u8]) -> Result<BmpHeaders, BitmapError> {
    BmpHeaders::parse(data).map(|(headers, _)| headers)
}
